//! One predicate per filter axis.
//!
//! Each predicate answers its own axis only and passes whenever the axis
//! is unconstrained. None of them mutate or read anything beyond the
//! record and the supplied clock.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use kaizen_core::query::{CompletionFilter, DateRange};
use kaizen_core::record::{ActionRecord, Priority};

/// Completion axis.
pub fn completion(record: &ActionRecord, filter: CompletionFilter) -> bool {
    match filter {
        CompletionFilter::All => true,
        CompletionFilter::Completed => record.is_completed(),
        CompletionFilter::Incomplete => !record.is_completed(),
    }
}

/// Deadline window. A bounded window excludes records with no deadline.
pub fn deadline_window(record: &ActionRecord, range: &DateRange) -> bool {
    if range.is_unbounded() {
        return true;
    }
    match record.deadline {
        Some(deadline) => range.contains(deadline),
        None => false,
    }
}

/// Creation window. `created_at` always exists, so this is pure
/// containment.
pub fn created_window(record: &ActionRecord, range: &DateRange) -> bool {
    range.contains(record.created_at)
}

/// Priority membership. An empty set is unconstrained.
pub fn priority_membership(record: &ActionRecord, priorities: &HashSet<Priority>) -> bool {
    priorities.is_empty() || priorities.contains(&record.priority)
}

/// Owning-retrospective match. A record with no owner fails any set
/// constraint.
pub fn retrospective_match(record: &ActionRecord, retrospective_id: Option<&str>) -> bool {
    match retrospective_id {
        None => true,
        Some(id) => record.retrospective_id.as_deref() == Some(id),
    }
}

/// Overdue gate. Overdue is answered by the record itself, with the same
/// definition statistics use.
pub fn overdue_gate(record: &ActionRecord, overdue_only: bool, now: DateTime<Utc>) -> bool {
    !overdue_only || record.is_overdue(now)
}

/// Try-origin gate.
pub fn origin_gate(record: &ActionRecord, origin_only: bool) -> bool {
    !origin_only || record.from_try_item
}
