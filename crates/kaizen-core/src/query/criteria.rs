use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::record::Priority;

/// Completion axis of a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    /// No constraint.
    #[default]
    All,
    Completed,
    Incomplete,
}

/// Inclusive time window. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Window bounded on both ends.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Window open towards the future.
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Window open towards the past.
    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Whether both ends are open.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive containment. An unbounded range contains everything.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if at > end {
                return false;
            }
        }
        true
    }
}

/// Independent, optional constraints over action records.
///
/// Every axis defaults to unconstrained and never excludes a record while
/// unset. Set axes combine with AND; each predicate reads only the record
/// and the clock, so the conjunction commutes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub completion: CompletionFilter,

    /// Window over `deadline`. When bounded, records without a deadline
    /// are excluded.
    pub deadline_range: DateRange,

    /// Window over `created_at`.
    pub created_range: DateRange,

    /// Admitted priorities. Empty means unconstrained.
    pub priorities: HashSet<Priority>,

    /// Owning retrospective the record must belong to.
    pub retrospective_id: Option<String>,

    /// Keep only records overdue at evaluation time.
    pub overdue_only: bool,

    /// Keep only records derived from a Try entry.
    pub origin_only: bool,
}

impl FilterCriteria {
    /// Whether every axis is at its unconstrained default. Applying such
    /// criteria returns the input unchanged.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
