use crate::errors::KaizenResult;
use crate::record::ActionRecord;
use crate::retro::{KptaItem, Retrospective};

/// Read seam over the record collection.
///
/// Implementations hand out owned snapshots, never references into their
/// own state, so callers can filter and sort without holding store locks.
/// The store maintains the ownership graph; a resolution error from
/// `items_of`/`records_of` means a dangling child id, which is a store
/// bug, not a caller mistake.
pub trait IRecordStore: Send + Sync {
    /// Fetch one retrospective.
    fn retrospective(&self, id: &str) -> Option<Retrospective>;

    /// Fetch one action record.
    fn record(&self, id: &str) -> Option<ActionRecord>;

    /// Fetch one KPTA item.
    fn item(&self, id: &str) -> Option<KptaItem>;

    /// Snapshot of every action record, in no particular order.
    fn records(&self) -> Vec<ActionRecord>;

    /// A retrospective's items, resolved in the order of its id list.
    fn items_of(&self, retrospective_id: &str) -> KaizenResult<Vec<KptaItem>>;

    /// A retrospective's action records, resolved in the order of its id
    /// list.
    fn records_of(&self, retrospective_id: &str) -> KaizenResult<Vec<ActionRecord>>;
}
