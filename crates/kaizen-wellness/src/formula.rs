//! The weighted partial average.
//!
//! ```text
//! score = round( Σ weight(m) · sub(m)  /  Σ weight(m) )    over present m
//! ```
//!
//! Weights renormalize over the present subset, so a lone metric carries
//! full weight and a partial sample is never punished for what the device
//! did not record. A metric with weight 0 is disabled and does not count
//! as present.

use kaizen_core::config::WellnessConfig;
use kaizen_core::constants::SCORE_MAX;
use kaizen_core::health::HealthMetricsSample;

use crate::metrics::Metric;

/// Blend one sample into a 0..=100 score.
///
/// `None` when no scored metric is present.
pub fn compute(sample: &HealthMetricsSample, config: &WellnessConfig) -> Option<u8> {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for metric in Metric::ALL {
        let weight = metric.weight(config);
        if weight <= 0.0 {
            continue;
        }
        if let Some(sub) = metric.sub_score(sample, config) {
            weighted_sum += weight * sub;
            weight_sum += weight;
        }
    }

    if weight_sum == 0.0 {
        return None;
    }

    let score = (weighted_sum / weight_sum).round();
    debug_assert!(
        (0.0..=SCORE_MAX).contains(&score),
        "blended score out of bounds: {score}"
    );
    Some(score.clamp(0.0, SCORE_MAX) as u8)
}

/// One metric's share of a blended score.
#[derive(Debug, Clone)]
pub struct MetricContribution {
    pub metric: Metric,

    /// Normalized 0..=100 sub-score.
    pub sub_score: f64,

    /// Weight after renormalization over the present subset. Sums to 1.0
    /// across the breakdown.
    pub effective_weight: f64,
}

/// Per-metric detail behind one blended score.
#[derive(Debug, Clone)]
pub struct WellnessBreakdown {
    pub contributions: Vec<MetricContribution>,

    /// The blended score; `None` when no scored metric was present.
    pub score: Option<u8>,
}

/// Compute the score together with its per-metric contributions.
pub fn compute_breakdown(sample: &HealthMetricsSample, config: &WellnessConfig) -> WellnessBreakdown {
    let mut present: Vec<(Metric, f64, f64)> = Vec::with_capacity(Metric::COUNT);
    let mut weight_sum = 0.0;

    for metric in Metric::ALL {
        let weight = metric.weight(config);
        if weight <= 0.0 {
            continue;
        }
        if let Some(sub) = metric.sub_score(sample, config) {
            present.push((metric, weight, sub));
            weight_sum += weight;
        }
    }

    if weight_sum == 0.0 {
        return WellnessBreakdown {
            contributions: Vec::new(),
            score: None,
        };
    }

    // Blend from the raw weights, exactly as `compute` does, so the two
    // can never round a half-way score differently.
    let weighted_sum: f64 = present.iter().map(|(_, weight, sub)| weight * sub).sum();
    let score = (weighted_sum / weight_sum).round().clamp(0.0, SCORE_MAX) as u8;

    let contributions: Vec<MetricContribution> = present
        .into_iter()
        .map(|(metric, weight, sub)| MetricContribution {
            metric,
            sub_score: sub,
            effective_weight: weight / weight_sum,
        })
        .collect();

    WellnessBreakdown {
        contributions,
        score: Some(score),
    }
}
