use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Priority;
use crate::retro::KptaItem;

/// A trackable action item.
///
/// Records either stand alone or belong to exactly one retrospective,
/// referenced through `retrospective_id`. Ownership lives on the
/// retrospective side as an ordered id list; the record only carries the
/// back-reference.
///
/// Completion is stored as the timestamp alone: a record is completed
/// exactly when `completed_at` is set, so a flag and a timestamp can never
/// disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// What needs doing.
    pub text: String,

    pub priority: Priority,

    /// Optional due moment.
    pub deadline: Option<DateTime<Utc>>,

    /// Set exactly while the record is completed.
    pub completed_at: Option<DateTime<Utc>>,

    /// Whether this action was derived from a Try entry.
    pub from_try_item: bool,

    /// Free-form notes.
    pub notes: Option<String>,

    /// Owning retrospective, when attached.
    pub retrospective_id: Option<String>,

    /// Try entry this action was derived from.
    pub source_item_id: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Touched by every mutation.
    pub updated_at: DateTime<Utc>,
}

impl ActionRecord {
    /// Create a standalone record. `now` becomes both the creation and the
    /// update time.
    pub fn new(text: impl Into<String>, priority: Priority, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            priority,
            deadline: None,
            completed_at: None,
            from_try_item: false,
            notes: None,
            retrospective_id: None,
            source_item_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derive an action from a Try entry.
    ///
    /// Marks the Try origin, keeps a back-reference to the source item, and
    /// attaches the record to the item's retrospective.
    pub fn from_try(item: &KptaItem, priority: Priority, now: DateTime<Utc>) -> Self {
        let mut record = Self::new(item.text.clone(), priority, now);
        record.from_try_item = true;
        record.source_item_id = Some(item.id.clone());
        record.retrospective_id = Some(item.retrospective_id.clone());
        record
    }

    /// Attach a deadline at construction time.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach notes at construction time.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach to a retrospective at construction time.
    pub fn owned_by(mut self, retrospective_id: impl Into<String>) -> Self {
        self.retrospective_id = Some(retrospective_id.into());
        self
    }

    /// Whether the record is completed. Derived from `completed_at`.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether the record is overdue at `now`: it has a deadline, the
    /// deadline is strictly in the past, and the record is not completed.
    ///
    /// Filtering and statistics both answer overdue through this method,
    /// so the two can never drift apart.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now && !self.is_completed(),
            None => false,
        }
    }

    // ── Mutations. Each one stamps `updated_at`. ──

    pub fn set_text(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.text = text.into();
        self.updated_at = now;
    }

    pub fn set_priority(&mut self, priority: Priority, now: DateTime<Utc>) {
        self.priority = priority;
        self.updated_at = now;
    }

    pub fn set_deadline(&mut self, deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.deadline = deadline;
        self.updated_at = now;
    }

    pub fn set_notes(&mut self, notes: Option<String>, now: DateTime<Utc>) {
        self.notes = notes;
        self.updated_at = now;
    }

    /// Mark completed at `now`.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    /// Clear completion.
    pub fn reopen(&mut self, now: DateTime<Utc>) {
        self.completed_at = None;
        self.updated_at = now;
    }

    /// Set the completion state. Completing stamps `completed_at = now`.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        if completed {
            self.complete(now);
        } else {
            self.reopen(now);
        }
    }
}

/// Records are entities: equality is identity, not field-by-field
/// comparison. Two snapshots of the same record compare equal even when
/// one has been mutated.
impl PartialEq for ActionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
