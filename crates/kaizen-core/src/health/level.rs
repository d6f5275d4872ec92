use serde::{Deserialize, Serialize};

/// Display band for a wellness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl WellnessLevel {
    /// Scores at or above this are excellent.
    pub const EXCELLENT_THRESHOLD: u8 = 80;
    /// Scores at or above this are good.
    pub const GOOD_THRESHOLD: u8 = 60;
    /// Scores at or above this are fair; anything below is poor.
    pub const FAIR_THRESHOLD: u8 = 40;

    /// All bands, best first.
    pub const ALL: [WellnessLevel; 4] = [
        WellnessLevel::Excellent,
        WellnessLevel::Good,
        WellnessLevel::Fair,
        WellnessLevel::Poor,
    ];

    /// Band for a 0..=100 score.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            WellnessLevel::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            WellnessLevel::Good
        } else if score >= Self::FAIR_THRESHOLD {
            WellnessLevel::Fair
        } else {
            WellnessLevel::Poor
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            WellnessLevel::Excellent => "Excellent",
            WellnessLevel::Good => "Good",
            WellnessLevel::Fair => "Fair",
            WellnessLevel::Poor => "Poor",
        }
    }
}
