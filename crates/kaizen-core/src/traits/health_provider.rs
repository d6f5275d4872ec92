use chrono::{DateTime, Utc};

use crate::errors::KaizenResult;
use crate::health::HealthMetricsSample;

/// Health-data seam.
///
/// The platform side owns authorization and raw-sample aggregation; the
/// core consumes one already-aggregated sample per period.
pub trait IHealthProvider: Send + Sync {
    /// Aggregated metrics for `[start, end]`, or `None` when the platform
    /// has no data for the period.
    fn period_sample(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> KaizenResult<Option<HealthMetricsSample>>;
}
