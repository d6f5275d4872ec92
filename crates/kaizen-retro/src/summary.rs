//! Per-retrospective aggregate counters.

use serde::{Deserialize, Serialize};

/// The counters a review screen shows for one retrospective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetroSummary {
    /// Actions not yet completed.
    pub pending_actions: usize,

    pub completed_actions: usize,

    /// `completed / total` over the retrospective's actions. 0.0 when it
    /// has none.
    pub action_completion_rate: f64,

    /// Items across keep, problem, and try.
    pub total_kpta_count: usize,

    /// Whole-day span of the period. 0 for a same-day retrospective.
    pub period_days: i64,
}
