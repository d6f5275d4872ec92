//! Aggregate output models shared between engines and callers.

mod statistics;

pub use statistics::{ActionStatistics, PriorityCounts};
