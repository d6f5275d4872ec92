use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::retro::RetroKind;

/// A reflection period.
///
/// The retrospective is the owning side of the graph: it holds its KPTA
/// items and action records as ordered id lists, and the record store
/// resolves those ids against its arenas. Children carry plain back-ids
/// only, so there are no owning reference cycles anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retrospective {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub title: String,

    pub kind: RetroKind,

    pub start_date: DateTime<Utc>,

    /// Write-path invariant: `start_date <= end_date`. Read engines assume
    /// it holds.
    pub end_date: DateTime<Utc>,

    /// Owned KPTA items, in insertion order.
    pub item_ids: Vec<String>,

    /// Owned action records, in insertion order.
    pub action_ids: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl Retrospective {
    pub fn new(
        title: impl Into<String>,
        kind: RetroKind,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            start_date,
            end_date,
            item_ids: Vec::new(),
            action_ids: Vec::new(),
            created_at: now,
        }
    }

    /// Whole-day span of the period, truncating partial days.
    ///
    /// A retrospective starting and ending on the same day spans 0 days.
    pub fn period_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
