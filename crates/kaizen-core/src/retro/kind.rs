use serde::{Deserialize, Serialize};

/// Cadence of a retrospective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetroKind {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl RetroKind {
    /// Total number of cadences.
    pub const COUNT: usize = 3;

    /// All cadences, shortest period first.
    pub const ALL: [RetroKind; 3] = [RetroKind::Daily, RetroKind::Weekly, RetroKind::Monthly];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RetroKind::Daily => "Daily",
            RetroKind::Weekly => "Weekly",
            RetroKind::Monthly => "Monthly",
        }
    }
}
