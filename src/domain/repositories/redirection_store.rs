//! Store trait for redirection records.

use std::collections::HashMap;

use crate::domain::entities::RedirectionRecord;
use crate::domain::errors::StoreError;

/// Full contents of a store keyed by short identifier.
pub type RedirectionMap = HashMap<String, RedirectionRecord>;

/// Key-value container mapping short identifiers to [`RedirectionRecord`]s.
///
/// All methods must be safe to call concurrently. Read-only calls (`get`,
/// `enumerate`, `len`) may run alongside each other; mutating calls must be
/// exclusive with every other call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - `RwLock`-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RedirectionStore: Send + Sync {
    /// Returns a copy of the record stored under `id`, if any.
    fn get(&self, id: &str) -> Option<RedirectionRecord>;

    /// Inserts `record` under `id` only if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] without overwriting if `id` is taken.
    fn set(&self, id: &str, record: RedirectionRecord) -> Result<(), StoreError>;

    /// Increments the hit count of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` is absent.
    fn hit(&self, id: &str) -> Result<(), StoreError>;

    /// Reads a record and increments its hit count under a single lock.
    ///
    /// Returns the record as it was before the increment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `id` is absent.
    fn get_and_hit(&self, id: &str) -> Result<RedirectionRecord, StoreError>;

    /// Returns an owned copy of the current contents.
    fn enumerate(&self) -> RedirectionMap;

    /// Discards the current contents and installs `mapping` atomically.
    fn replace_all(&self, mapping: RedirectionMap);

    /// Number of stored identifiers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
