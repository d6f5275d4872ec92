//! Retrospective aggregation.
//!
//! Items arrive as one flat collection per retrospective, already
//! resolved from the store; the functions here never fetch anything
//! themselves.

use tracing::debug;

use kaizen_core::record::ActionRecord;
use kaizen_core::retro::{KptaCategory, KptaItem, Retrospective};

use crate::summary::RetroSummary;
use crate::views::CategoryViews;

/// Partition a flat item collection into the three category views.
///
/// Each view sorts ascending by `order_index`; equal indexes fall back to
/// creation time, so duplicates after a reorder still display stably.
pub fn categorize(items: &[KptaItem]) -> CategoryViews {
    let mut views = CategoryViews::default();
    for item in items {
        match item.category {
            KptaCategory::Keep => views.keeps.push(item.clone()),
            KptaCategory::Problem => views.problems.push(item.clone()),
            KptaCategory::Try => views.tries.push(item.clone()),
        }
    }

    for view in [&mut views.keeps, &mut views.problems, &mut views.tries] {
        view.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
    }
    views
}

/// Compute the counters for one retrospective over its resolved children.
///
/// `items` and `actions` are the retrospective's own; the caller resolves
/// them (see `IRecordStore::items_of` / `records_of`). Every item lands
/// in exactly one category, so the KPTA count is the collection length.
pub fn summarize(
    retro: &Retrospective,
    items: &[KptaItem],
    actions: &[ActionRecord],
) -> RetroSummary {
    let completed_actions = actions.iter().filter(|a| a.is_completed()).count();
    let pending_actions = actions.len() - completed_actions;
    let action_completion_rate = if actions.is_empty() {
        0.0
    } else {
        completed_actions as f64 / actions.len() as f64
    };

    let summary = RetroSummary {
        pending_actions,
        completed_actions,
        action_completion_rate,
        total_kpta_count: items.len(),
        period_days: retro.period_days(),
    };

    debug!(
        retro_id = %retro.id,
        items = items.len(),
        actions = actions.len(),
        "summarized retrospective"
    );
    summary
}
