//! Query vocabulary: filter criteria and sort orders.
//!
//! The types live here so every crate speaks the same query language; the
//! evaluation itself is in `kaizen-query`.

mod criteria;
mod sort_order;

pub use criteria::{CompletionFilter, DateRange, FilterCriteria};
pub use sort_order::{ParseSortOrderError, SortOrder};
