//! Single source of truth for all default configuration values.

// ── Wellness blend weights ──

pub const DEFAULT_SLEEP_QUALITY_WEIGHT: f64 = 0.35;
pub const DEFAULT_STEPS_WEIGHT: f64 = 0.25;
pub const DEFAULT_EXERCISE_WEIGHT: f64 = 0.25;
pub const DEFAULT_STAND_WEIGHT: f64 = 0.15;

// ── Wellness saturation targets ──

/// Daily step count at which the steps sub-score reaches 100.
pub const DEFAULT_STEPS_TARGET: f64 = 10_000.0;

/// Exercise minutes at which the exercise sub-score reaches 100.
pub const DEFAULT_EXERCISE_TARGET_MINUTES: f64 = 30.0;

/// Daily stand hours at which the stand sub-score reaches 100.
pub const DEFAULT_STAND_TARGET_HOURS: f64 = 12.0;
