//! One comparator per sort order.
//!
//! The deadline comparators place undated records explicitly instead of
//! reversing each other: ascending puts them last (a missing deadline is
//! "furthest away"), descending puts them first. Within the undated block
//! they fall back to creation time, following the direction of the order.

use std::cmp::Ordering;

use kaizen_core::record::ActionRecord;

/// Oldest created first. Ties compare equal; the stable sort keeps input
/// order.
pub fn created_asc(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

/// Most recently created first.
pub fn created_desc(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

/// Dated records first, earliest deadline first; undated records trail in
/// creation order, oldest first.
pub fn deadline_asc(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    }
}

/// Undated records first, newest created first; dated records follow,
/// latest deadline first.
pub fn deadline_desc(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => b.created_at.cmp(&a.created_at),
    }
}

/// High before medium before low; ties broken newest created first.
pub fn priority_high_first(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Low before medium before high; ties broken newest created first.
pub fn priority_low_first(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Most recently updated first.
pub fn updated_desc(a: &ActionRecord, b: &ActionRecord) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}
