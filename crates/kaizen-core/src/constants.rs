//! System-wide constants.
//!
//! Tunable defaults live in [`crate::config::defaults`]; this module only
//! holds values that are not meant to be configured.

/// Kaizen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every normalized score in the system.
///
/// Wellness sub-scores and the blended wellness score are all expressed on
/// a 0..=100 scale.
pub const SCORE_MAX: f64 = 100.0;
