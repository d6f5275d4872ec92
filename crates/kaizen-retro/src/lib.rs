//! # kaizen-retro
//!
//! Read-side aggregation for one retrospective: partitioning its raw KPTA
//! entries into category views and computing the counters a review screen
//! shows.

pub mod aggregator;
pub mod summary;
pub mod views;

pub use aggregator::{categorize, summarize};
pub use summary::RetroSummary;
pub use views::CategoryViews;
