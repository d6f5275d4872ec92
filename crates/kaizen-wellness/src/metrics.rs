//! The scored metric table.
//!
//! One variant per scored metric, with its weight lookup and its 0..=100
//! normalizer. Adding a metric means adding a variant and extending each
//! match; everything downstream iterates [`Metric::ALL`]. Sleep duration,
//! active calories, and workout counts ride along on the sample but are
//! not scored.

use kaizen_core::config::WellnessConfig;
use kaizen_core::constants::SCORE_MAX;
use kaizen_core::health::HealthMetricsSample;

/// The scored wellness metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    SleepQuality,
    Steps,
    ExerciseMinutes,
    StandHours,
}

impl Metric {
    /// Total number of scored metrics.
    pub const COUNT: usize = 4;

    /// All scored metrics, heaviest default weight first.
    pub const ALL: [Metric; 4] = [
        Metric::SleepQuality,
        Metric::Steps,
        Metric::ExerciseMinutes,
        Metric::StandHours,
    ];

    /// Configured blend weight.
    pub fn weight(&self, config: &WellnessConfig) -> f64 {
        match self {
            Metric::SleepQuality => config.sleep_quality_weight,
            Metric::Steps => config.steps_weight,
            Metric::ExerciseMinutes => config.exercise_weight,
            Metric::StandHours => config.stand_weight,
        }
    }

    /// Normalized sub-score, or `None` when the sample does not carry the
    /// metric.
    ///
    /// Sleep quality already lives on the score scale and is only
    /// clamped; the other three ramp linearly and saturate at their
    /// configured target.
    pub fn sub_score(&self, sample: &HealthMetricsSample, config: &WellnessConfig) -> Option<f64> {
        match self {
            Metric::SleepQuality => sample
                .avg_sleep_quality_score
                .map(|score| score.clamp(0.0, SCORE_MAX)),
            Metric::Steps => sample
                .avg_steps
                .map(|steps| saturating_ramp(steps, config.steps_target)),
            Metric::ExerciseMinutes => sample
                .total_exercise_minutes
                .map(|minutes| saturating_ramp(minutes, config.exercise_target_minutes)),
            Metric::StandHours => sample
                .avg_stand_hours
                .map(|hours| saturating_ramp(hours, config.stand_target_hours)),
        }
    }

    /// Label used in breakdowns and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::SleepQuality => "sleep_quality",
            Metric::Steps => "steps",
            Metric::ExerciseMinutes => "exercise_minutes",
            Metric::StandHours => "stand_hours",
        }
    }
}

/// Linear ramp reaching [`SCORE_MAX`] at `target`, saturating above it.
/// Negative raw values clamp to 0.
fn saturating_ramp(value: f64, target: f64) -> f64 {
    (value * SCORE_MAX / target).clamp(0.0, SCORE_MAX)
}
