//! # kaizen-query
//!
//! Filtering and sorting over action-record snapshots.
//!
//! Both stages are pure: they take immutable slices, allocate fresh
//! output, and leave evaluation time to the caller so results are
//! reproducible for a given snapshot and clock.

pub mod engine;
pub mod filter;
pub mod sort;

pub use engine::QueryEngine;
