//! # kaizen-wellness
//!
//! Blended wellness scoring over aggregated health samples.
//!
//! Four metrics are scored, each with a weight and a 0..=100 normalizer;
//! the blend renormalizes the weights over whichever metrics a sample
//! actually carries. No metrics means no score. A missing score is not a
//! zero score.

pub mod engine;
pub mod formula;
pub mod metrics;

pub use engine::WellnessScorer;
pub use formula::{MetricContribution, WellnessBreakdown};
pub use metrics::Metric;
