//! Record sorting.
//!
//! Every sort order maps to one total comparator in [`comparators`]. The
//! sort itself is stable, so orders that compare equal on ties (the
//! created and updated orders) preserve input order.

pub mod comparators;

use std::cmp::Ordering;

use kaizen_core::query::SortOrder;
use kaizen_core::record::ActionRecord;

/// Sort a snapshot into a fresh vector.
pub fn apply(records: &[ActionRecord], order: SortOrder) -> Vec<ActionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(comparator(order));
    sorted
}

/// The comparator backing a sort order.
pub fn comparator(order: SortOrder) -> fn(&ActionRecord, &ActionRecord) -> Ordering {
    match order {
        SortOrder::CreatedAsc => comparators::created_asc,
        SortOrder::CreatedDesc => comparators::created_desc,
        SortOrder::DeadlineAsc => comparators::deadline_asc,
        SortOrder::DeadlineDesc => comparators::deadline_desc,
        SortOrder::PriorityHighFirst => comparators::priority_high_first,
        SortOrder::PriorityLowFirst => comparators::priority_low_first,
        SortOrder::UpdatedDesc => comparators::updated_desc,
    }
}
