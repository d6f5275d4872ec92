//! Query engine: the filter → sort pipeline over one snapshot.

use chrono::{DateTime, Utc};
use tracing::debug;

use kaizen_core::query::{FilterCriteria, SortOrder};
use kaizen_core::record::ActionRecord;

use crate::{filter, sort};

/// Orchestrates the two query stages.
///
/// Stateless. Evaluation time is a per-call parameter so the overdue axis
/// is deterministic for a given snapshot and clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Filter, then sort.
    pub fn run(
        &self,
        records: &[ActionRecord],
        criteria: &FilterCriteria,
        order: SortOrder,
        now: DateTime<Utc>,
    ) -> Vec<ActionRecord> {
        // Stage 1: predicate filter.
        let filtered = filter::apply(records, criteria, now);
        debug!(input = records.len(), kept = filtered.len(), "filter stage done");

        // Stage 2: total ordering.
        let sorted = sort::apply(&filtered, order);
        debug!(order = %order, "sort stage done");

        sorted
    }
}
