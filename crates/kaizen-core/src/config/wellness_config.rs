use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::errors::ConfigError;

/// Wellness scoring configuration.
///
/// Weights are blend proportions over the scored metrics. They do not have
/// to sum to 1: the scorer renormalizes over whichever metrics a sample
/// actually carries. A metric with weight 0 is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessConfig {
    pub sleep_quality_weight: f64,
    pub steps_weight: f64,
    pub exercise_weight: f64,
    pub stand_weight: f64,

    /// Daily steps at which the steps sub-score saturates at 100.
    pub steps_target: f64,

    /// Exercise minutes at which the exercise sub-score saturates at 100.
    pub exercise_target_minutes: f64,

    /// Daily stand hours at which the stand sub-score saturates at 100.
    pub stand_target_hours: f64,
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            sleep_quality_weight: defaults::DEFAULT_SLEEP_QUALITY_WEIGHT,
            steps_weight: defaults::DEFAULT_STEPS_WEIGHT,
            exercise_weight: defaults::DEFAULT_EXERCISE_WEIGHT,
            stand_weight: defaults::DEFAULT_STAND_WEIGHT,
            steps_target: defaults::DEFAULT_STEPS_TARGET,
            exercise_target_minutes: defaults::DEFAULT_EXERCISE_TARGET_MINUTES,
            stand_target_hours: defaults::DEFAULT_STAND_TARGET_HOURS,
        }
    }
}

impl WellnessConfig {
    /// Validate weights and targets.
    ///
    /// Weights must be finite and non-negative with a positive sum, or
    /// renormalization would divide by zero. Targets must be finite and
    /// positive, since they divide the raw metric values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("sleep_quality_weight", self.sleep_quality_weight),
            ("steps_weight", self.steps_weight),
            ("exercise_weight", self.exercise_weight),
            ("stand_weight", self.stand_weight),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeights {
                    reason: format!("{name} must be finite and non-negative, got {weight}"),
                });
            }
        }
        let sum: f64 = weights.iter().map(|(_, w)| w).sum();
        if sum <= 0.0 {
            return Err(ConfigError::InvalidWeights {
                reason: "at least one weight must be positive".to_string(),
            });
        }

        let targets = [
            ("steps_target", self.steps_target),
            ("exercise_target_minutes", self.exercise_target_minutes),
            ("stand_target_hours", self.stand_target_hours),
        ];
        for (name, target) in targets {
            if !target.is_finite() || target <= 0.0 {
                return Err(ConfigError::InvalidTarget {
                    reason: format!("{name} must be finite and positive, got {target}"),
                });
            }
        }
        Ok(())
    }
}
