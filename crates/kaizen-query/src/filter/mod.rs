//! Record filtering.
//!
//! Criteria are a conjunction of independent axes. Each axis is one pure
//! predicate in [`predicates`]; an unset axis always passes, so default
//! criteria return the input unchanged.

pub mod predicates;

use chrono::{DateTime, Utc};

use kaizen_core::query::FilterCriteria;
use kaizen_core::record::ActionRecord;

/// Evaluate one record against the criteria at `now`.
///
/// The conjunction commutes: every predicate reads only the record and
/// the clock, so axis order cannot change the outcome.
pub fn matches(record: &ActionRecord, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    predicates::completion(record, criteria.completion)
        && predicates::deadline_window(record, &criteria.deadline_range)
        && predicates::created_window(record, &criteria.created_range)
        && predicates::priority_membership(record, &criteria.priorities)
        && predicates::retrospective_match(record, criteria.retrospective_id.as_deref())
        && predicates::overdue_gate(record, criteria.overdue_only, now)
        && predicates::origin_gate(record, criteria.origin_only)
}

/// Filter a snapshot, preserving input order.
pub fn apply(
    records: &[ActionRecord],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<ActionRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria, now))
        .cloned()
        .collect()
}
