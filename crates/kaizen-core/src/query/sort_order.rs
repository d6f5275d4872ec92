use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort order for record listings.
///
/// Closed set of seven orders. The deadline orders place undated records
/// explicitly rather than leaving it to chance: ascending puts them last,
/// descending puts them first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Oldest created first.
    CreatedAsc,
    /// Most recently created first.
    #[default]
    CreatedDesc,
    /// Earliest deadline first; undated records last, oldest first.
    DeadlineAsc,
    /// Undated records first, newest first; then latest deadline first.
    DeadlineDesc,
    /// High before medium before low; ties newest first.
    PriorityHighFirst,
    /// Low before medium before high; ties newest first.
    PriorityLowFirst,
    /// Most recently updated first.
    UpdatedDesc,
}

impl SortOrder {
    /// Total number of sort orders.
    pub const COUNT: usize = 7;

    /// All orders for iteration.
    pub const ALL: [SortOrder; 7] = [
        SortOrder::CreatedAsc,
        SortOrder::CreatedDesc,
        SortOrder::DeadlineAsc,
        SortOrder::DeadlineDesc,
        SortOrder::PriorityHighFirst,
        SortOrder::PriorityLowFirst,
        SortOrder::UpdatedDesc,
    ];

    /// Canonical wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::CreatedAsc => "created_asc",
            SortOrder::CreatedDesc => "created_desc",
            SortOrder::DeadlineAsc => "deadline_asc",
            SortOrder::DeadlineDesc => "deadline_desc",
            SortOrder::PriorityHighFirst => "priority_high_first",
            SortOrder::PriorityLowFirst => "priority_low_first",
            SortOrder::UpdatedDesc => "updated_desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown sort order '{0}'")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    /// Parse a canonical name or a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_asc" | "oldest" => Ok(SortOrder::CreatedAsc),
            "created_desc" | "newest" => Ok(SortOrder::CreatedDesc),
            "deadline_asc" | "deadline" => Ok(SortOrder::DeadlineAsc),
            "deadline_desc" => Ok(SortOrder::DeadlineDesc),
            "priority_high_first" | "priority" => Ok(SortOrder::PriorityHighFirst),
            "priority_low_first" => Ok(SortOrder::PriorityLowFirst),
            "updated_desc" | "recent" => Ok(SortOrder::UpdatedDesc),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}
