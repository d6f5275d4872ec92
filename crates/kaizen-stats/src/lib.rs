//! # kaizen-stats
//!
//! Aggregate counters over action-record snapshots: totals, completion
//! split, overdue count, per-priority counts, Try-origin count, and the
//! completion rate.

pub mod engine;

pub use engine::summarize;
