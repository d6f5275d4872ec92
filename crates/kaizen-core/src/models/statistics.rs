use serde::{Deserialize, Serialize};

use crate::record::Priority;

/// Aggregate counters over a collection of action records.
///
/// Describes exactly the collection handed in; callers pre-filter when
/// they want a narrower scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionStatistics {
    pub total: usize,

    pub completed: usize,

    pub incomplete: usize,

    /// Deadline strictly in the past and still incomplete.
    pub overdue: usize,

    pub by_priority: PriorityCounts,

    /// Records derived from Try entries.
    pub from_try_count: usize,

    /// `completed / total`. 0.0 for an empty collection.
    pub completion_rate: f64,
}

/// Record counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    /// Count for one priority level.
    pub fn count_for(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn increment(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }

    /// Sum across all levels. Equals the total record count, since every
    /// record has exactly one priority.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
