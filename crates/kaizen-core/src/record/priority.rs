use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Priority level of an action record.
///
/// The set is closed: exactly these three levels exist, and every
/// per-priority lookup in the system is a total match over them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Total number of priority levels.
    pub const COUNT: usize = 3;

    /// All levels, highest first, for iteration.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Position in the total order. 0 sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Icon token for list rendering.
    pub fn icon(&self) -> &'static str {
        match self {
            Priority::High => "arrow-up-circle",
            Priority::Medium => "minus-circle",
            Priority::Low => "arrow-down-circle",
        }
    }

    /// Hex color for list rendering.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => "#E53935",
            Priority::Medium => "#FB8C00",
            Priority::Low => "#43A047",
        }
    }
}

impl Ord for Priority {
    /// `High < Medium < Low`, so ascending sorts put high priority first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
