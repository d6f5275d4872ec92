//! The arena store.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use kaizen_core::errors::{KaizenResult, StoreError};
use kaizen_core::record::ActionRecord;
use kaizen_core::retro::{KptaItem, Retrospective};
use kaizen_core::traits::IRecordStore;

/// Thread-safe in-memory store over three id-keyed arenas.
///
/// Reads hand out owned snapshots and are safe under concurrency. Writes
/// are individually consistent but not transactional across arenas; the
/// application layer serializes mutation, as it does for any persistent
/// backend.
///
/// Cloning the store clones handles to the same arenas.
#[derive(Clone, Default)]
pub struct ArenaStore {
    retrospectives: Arc<DashMap<String, Retrospective>>,
    records: Arc<DashMap<String, ActionRecord>>,
    items: Arc<DashMap<String, KptaItem>>,
}

impl ArenaStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Inserts ──

    /// Insert a retrospective. Children are attached afterwards through
    /// [`insert_item`](Self::insert_item) and
    /// [`insert_record`](Self::insert_record), which maintain the id
    /// lists.
    pub fn insert_retrospective(&self, retro: Retrospective) -> KaizenResult<()> {
        if self.retrospectives.contains_key(&retro.id) {
            return Err(StoreError::DuplicateId { id: retro.id }.into());
        }
        debug!(retro_id = %retro.id, "inserting retrospective");
        self.retrospectives.insert(retro.id.clone(), retro);
        Ok(())
    }

    /// Insert a KPTA item and append it to its parent's item list.
    pub fn insert_item(&self, item: KptaItem) -> KaizenResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId { id: item.id }.into());
        }
        match self.retrospectives.get_mut(&item.retrospective_id) {
            Some(mut parent) => parent.item_ids.push(item.id.clone()),
            None => {
                return Err(StoreError::RetrospectiveNotFound {
                    id: item.retrospective_id,
                }
                .into())
            }
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Insert an action record. A record carrying a `retrospective_id` is
    /// appended to that parent's action list; a standalone record just
    /// lands in the arena.
    pub fn insert_record(&self, record: ActionRecord) -> KaizenResult<()> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateId { id: record.id }.into());
        }
        if let Some(retro_id) = &record.retrospective_id {
            match self.retrospectives.get_mut(retro_id) {
                Some(mut parent) => parent.action_ids.push(record.id.clone()),
                None => {
                    return Err(StoreError::RetrospectiveNotFound {
                        id: retro_id.clone(),
                    }
                    .into())
                }
            }
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    // ── Updates ──

    /// Mutate one record in place. The closure runs under the entry lock.
    pub fn update_record(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut ActionRecord),
    ) -> KaizenResult<()> {
        match self.records.get_mut(id) {
            Some(mut record) => {
                mutate(&mut record);
                Ok(())
            }
            None => Err(StoreError::RecordNotFound { id: id.to_string() }.into()),
        }
    }

    /// Mutate one item in place. The closure runs under the entry lock.
    pub fn update_item(&self, id: &str, mutate: impl FnOnce(&mut KptaItem)) -> KaizenResult<()> {
        match self.items.get_mut(id) {
            Some(mut item) => {
                mutate(&mut item);
                Ok(())
            }
            None => Err(StoreError::ItemNotFound { id: id.to_string() }.into()),
        }
    }

    // ── Removals ──

    /// Remove one record, detaching it from its parent's action list.
    pub fn remove_record(&self, id: &str) -> KaizenResult<ActionRecord> {
        match self.records.remove(id) {
            Some((_, record)) => {
                if let Some(retro_id) = &record.retrospective_id {
                    if let Some(mut parent) = self.retrospectives.get_mut(retro_id) {
                        parent.action_ids.retain(|action_id| action_id != id);
                    }
                }
                Ok(record)
            }
            None => Err(StoreError::RecordNotFound { id: id.to_string() }.into()),
        }
    }

    /// Remove one item, detaching it from its parent's item list.
    pub fn remove_item(&self, id: &str) -> KaizenResult<KptaItem> {
        match self.items.remove(id) {
            Some((_, item)) => {
                if let Some(mut parent) = self.retrospectives.get_mut(&item.retrospective_id) {
                    parent.item_ids.retain(|item_id| item_id != id);
                }
                Ok(item)
            }
            None => Err(StoreError::ItemNotFound { id: id.to_string() }.into()),
        }
    }

    /// Remove a retrospective and everything it owns.
    ///
    /// Children die with their parent. Standalone records are untouched;
    /// nothing else references them.
    pub fn remove_retrospective(&self, id: &str) -> KaizenResult<Retrospective> {
        match self.retrospectives.remove(id) {
            Some((_, retro)) => {
                for item_id in &retro.item_ids {
                    self.items.remove(item_id);
                }
                for action_id in &retro.action_ids {
                    self.records.remove(action_id);
                }
                info!(
                    retro_id = %retro.id,
                    items = retro.item_ids.len(),
                    actions = retro.action_ids.len(),
                    "removed retrospective with children"
                );
                Ok(retro)
            }
            None => Err(StoreError::RetrospectiveNotFound { id: id.to_string() }.into()),
        }
    }

    // ── Counts ──

    pub fn retrospective_count(&self) -> usize {
        self.retrospectives.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl IRecordStore for ArenaStore {
    fn retrospective(&self, id: &str) -> Option<Retrospective> {
        self.retrospectives.get(id).map(|entry| entry.clone())
    }

    fn record(&self, id: &str) -> Option<ActionRecord> {
        self.records.get(id).map(|entry| entry.clone())
    }

    fn item(&self, id: &str) -> Option<KptaItem> {
        self.items.get(id).map(|entry| entry.clone())
    }

    fn records(&self) -> Vec<ActionRecord> {
        self.records.iter().map(|entry| entry.value().clone()).collect()
    }

    fn items_of(&self, retrospective_id: &str) -> KaizenResult<Vec<KptaItem>> {
        let retro = self.retrospective(retrospective_id).ok_or_else(|| {
            StoreError::RetrospectiveNotFound {
                id: retrospective_id.to_string(),
            }
        })?;

        let mut items = Vec::with_capacity(retro.item_ids.len());
        for item_id in &retro.item_ids {
            match self.items.get(item_id) {
                Some(item) => items.push(item.clone()),
                None => {
                    return Err(StoreError::ItemNotFound {
                        id: item_id.clone(),
                    }
                    .into())
                }
            }
        }
        Ok(items)
    }

    fn records_of(&self, retrospective_id: &str) -> KaizenResult<Vec<ActionRecord>> {
        let retro = self.retrospective(retrospective_id).ok_or_else(|| {
            StoreError::RetrospectiveNotFound {
                id: retrospective_id.to_string(),
            }
        })?;

        let mut records = Vec::with_capacity(retro.action_ids.len());
        for action_id in &retro.action_ids {
            match self.records.get(action_id) {
                Some(record) => records.push(record.clone()),
                None => {
                    return Err(StoreError::RecordNotFound {
                        id: action_id.clone(),
                    }
                    .into())
                }
            }
        }
        Ok(records)
    }
}
