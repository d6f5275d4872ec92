use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::retro::KptaCategory;

/// A raw reflection entry owned by exactly one retrospective.
///
/// Items are write-once text: they carry a creation time but no update
/// time. Reordering within a category happens through `order_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KptaItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning retrospective. The parent holds the forward edge as an
    /// ordered id list; this is only the back-reference.
    pub retrospective_id: String,

    pub text: String,

    pub category: KptaCategory,

    /// Display position within the category. Lower sorts first.
    pub order_index: u32,

    pub created_at: DateTime<Utc>,
}

impl KptaItem {
    pub fn new(
        retrospective_id: impl Into<String>,
        text: impl Into<String>,
        category: KptaCategory,
        order_index: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            retrospective_id: retrospective_id.into(),
            text: text.into(),
            category,
            order_index,
            created_at: now,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_order_index(&mut self, order_index: u32) {
        self.order_index = order_index;
    }
}
