//! Wellness scorer: config-carrying front of the blend formula.

use chrono::{DateTime, Utc};
use tracing::debug;

use kaizen_core::config::WellnessConfig;
use kaizen_core::errors::KaizenResult;
use kaizen_core::health::{HealthMetricsSample, WellnessLevel};
use kaizen_core::traits::IHealthProvider;

use crate::formula::{self, WellnessBreakdown};

/// Blends whichever metrics a sample carries into one 0..=100 score.
pub struct WellnessScorer {
    config: WellnessConfig,
}

impl WellnessScorer {
    /// Scorer with the default weights and targets.
    pub fn new() -> Self {
        Self {
            config: WellnessConfig::default(),
        }
    }

    /// Scorer with custom weights and targets.
    pub fn with_config(config: WellnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WellnessConfig {
        &self.config
    }

    /// Score one sample. `None` means the sample carried no scored
    /// metric, never a zero score.
    ///
    /// Always recomputes from the raw metrics; a `wellness_score` stored
    /// on the sample is ignored.
    pub fn score(&self, sample: &HealthMetricsSample) -> Option<u8> {
        let score = formula::compute(sample, &self.config);
        debug!(?score, "scored wellness sample");
        score
    }

    /// Score one sample with per-metric detail.
    pub fn breakdown(&self, sample: &HealthMetricsSample) -> WellnessBreakdown {
        formula::compute_breakdown(sample, &self.config)
    }

    /// Display band for a sample's score.
    pub fn level(&self, sample: &HealthMetricsSample) -> Option<WellnessLevel> {
        self.score(sample).map(WellnessLevel::from_score)
    }

    /// Pull the period sample from the provider and score it.
    ///
    /// `Ok(None)` when the provider has no data for the period, or when
    /// the sample carries no scored metric.
    pub fn score_period(
        &self,
        provider: &dyn IHealthProvider,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> KaizenResult<Option<u8>> {
        match provider.period_sample(start, end)? {
            Some(sample) => Ok(self.score(&sample)),
            None => Ok(None),
        }
    }
}

impl Default for WellnessScorer {
    fn default() -> Self {
        Self::new()
    }
}
