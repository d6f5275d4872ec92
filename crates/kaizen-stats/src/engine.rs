//! Statistics engine: one pass over the snapshot.

use chrono::{DateTime, Utc};
use tracing::debug;

use kaizen_core::models::ActionStatistics;
use kaizen_core::record::ActionRecord;

/// Summarize a snapshot at `now`.
///
/// Counts exactly the records handed in; callers pre-filter when they
/// want a narrower scope. Overdue is answered by each record itself, with
/// the same definition the filter's overdue axis uses.
pub fn summarize(records: &[ActionRecord], now: DateTime<Utc>) -> ActionStatistics {
    let mut stats = ActionStatistics {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        if record.is_completed() {
            stats.completed += 1;
        } else {
            stats.incomplete += 1;
        }
        if record.is_overdue(now) {
            stats.overdue += 1;
        }
        if record.from_try_item {
            stats.from_try_count += 1;
        }
        stats.by_priority.increment(record.priority);
    }

    stats.completion_rate = if stats.total == 0 {
        0.0
    } else {
        stats.completed as f64 / stats.total as f64
    };

    debug!(
        total = stats.total,
        completed = stats.completed,
        overdue = stats.overdue,
        "summarized records"
    );
    stats
}
