use serde::{Deserialize, Serialize};

/// KPTA reflection category of a raw entry.
///
/// Closed set: Keep (worth continuing), Problem (got in the way), Try
/// (worth attempting next period). Actions are not a category; they are
/// first-class [`crate::record::ActionRecord`]s, optionally derived from a
/// Try entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KptaCategory {
    Keep,
    Problem,
    Try,
}

impl KptaCategory {
    /// Total number of categories.
    pub const COUNT: usize = 3;

    /// All categories in display order.
    pub const ALL: [KptaCategory; 3] =
        [KptaCategory::Keep, KptaCategory::Problem, KptaCategory::Try];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            KptaCategory::Keep => "Keep",
            KptaCategory::Problem => "Problem",
            KptaCategory::Try => "Try",
        }
    }

    /// Icon token for section headers.
    pub fn icon(&self) -> &'static str {
        match self {
            KptaCategory::Keep => "thumbs-up",
            KptaCategory::Problem => "alert-triangle",
            KptaCategory::Try => "flask",
        }
    }

    /// Hex color for section headers.
    pub fn color(&self) -> &'static str {
        match self {
            KptaCategory::Keep => "#4CAF50",
            KptaCategory::Problem => "#F44336",
            KptaCategory::Try => "#2196F3",
        }
    }
}
