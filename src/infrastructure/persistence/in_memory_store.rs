//! In-memory implementation of the redirection store.

use parking_lot::RwLock;
use std::collections::hash_map::Entry;

use crate::domain::entities::RedirectionRecord;
use crate::domain::errors::StoreError;
use crate::domain::repositories::{RedirectionMap, RedirectionStore};

/// Redirection store backed by a `HashMap` behind a single reader-writer lock.
///
/// Readers share the lock; `set`, `hit`, `get_and_hit` and `replace_all`
/// hold it exclusively.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<RedirectionMap>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RedirectionStore for InMemoryStore {
    fn get(&self, id: &str) -> Option<RedirectionRecord> {
        self.data.read().get(id).cloned()
    }

    fn set(&self, id: &str, record: RedirectionRecord) -> Result<(), StoreError> {
        match self.data.write().entry(id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn hit(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.data.write();
        let record = data
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.hits += 1;
        Ok(())
    }

    fn get_and_hit(&self, id: &str) -> Result<RedirectionRecord, StoreError> {
        let mut data = self.data.write();
        let record = data
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let before = record.clone();
        record.hits += 1;
        Ok(before)
    }

    fn enumerate(&self) -> RedirectionMap {
        self.data.read().clone()
    }

    fn replace_all(&self, mapping: RedirectionMap) {
        *self.data.write() = mapping;
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}
