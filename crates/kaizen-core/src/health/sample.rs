use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated health metrics for one period, as handed over by the
/// platform health provider.
///
/// Every metric is optional. Devices and permission grants differ, so a
/// sample may carry any subset, including none at all. The provider owns
/// authorization and raw-sample aggregation; the core only consumes the
/// finished per-period numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricsSample {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,

    /// Average nightly sleep duration.
    pub avg_sleep_minutes: Option<f64>,

    /// Average sleep quality score, 0..=100.
    pub avg_sleep_quality_score: Option<f64>,

    /// Average daily step count.
    pub avg_steps: Option<f64>,

    /// Total exercise minutes over the period.
    pub total_exercise_minutes: Option<f64>,

    /// Average daily stand hours.
    pub avg_stand_hours: Option<f64>,

    /// Average daily active calories. Carried for display, never scored.
    pub avg_active_calories: Option<f64>,

    /// Total workout count over the period. Carried for display, never
    /// scored.
    pub total_workouts: Option<u32>,

    /// A previously computed score, display-only. The scorer recomputes
    /// from the raw metrics and never reads this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellness_score: Option<u8>,
}

impl HealthMetricsSample {
    /// A sample covering a period with no metrics at all.
    pub fn empty(period_start: DateTime<Utc>, period_end: DateTime<Utc>) -> Self {
        Self {
            period_start,
            period_end,
            avg_sleep_minutes: None,
            avg_sleep_quality_score: None,
            avg_steps: None,
            total_exercise_minutes: None,
            avg_stand_hours: None,
            avg_active_calories: None,
            total_workouts: None,
            wellness_score: None,
        }
    }
}
