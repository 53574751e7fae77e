//! Short link creation, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::{ListEntry, RedirectionRecord};
use crate::domain::errors::{ShortenerError, StoreError};
use crate::domain::repositories::RedirectionStore;
use crate::utils::code_generator::hash_code;

/// Service for minting, resolving and listing short identifiers.
///
/// Works purely through the [`RedirectionStore`] contract; it never touches
/// the snapshot file and never logs.
pub struct ShortenerService<S: RedirectionStore + ?Sized> {
    store: Arc<S>,
    short_url_domain: String,
}

impl<S: RedirectionStore + ?Sized> ShortenerService<S> {
    /// Creates a new shortener service.
    ///
    /// `short_url_domain` is the public prefix used by [`Self::short_url`],
    /// e.g. `https://s.example.com`.
    pub fn new(store: Arc<S>, short_url_domain: impl Into<String>) -> Self {
        Self {
            store,
            short_url_domain: short_url_domain.into(),
        }
    }

    /// Mints a short identifier for `original_url`.
    ///
    /// # Code Generation
    ///
    /// Tries `hash_code(url, 0)`, `hash_code(url, 1)`, ... until the store
    /// accepts one. There is no retry cap and no deduplication: shortening
    /// the same URL twice yields two identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::EmptyInput`] for an empty URL; the store is
    /// left untouched.
    pub fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        if original_url.is_empty() {
            return Err(ShortenerError::EmptyInput);
        }

        let mut counter: u64 = 0;
        loop {
            let code = hash_code(original_url, counter);

            match self.store.set(&code, RedirectionRecord::new(original_url)) {
                Ok(()) => return Ok(code),
                Err(StoreError::AlreadyExists(_)) => counter += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Resolves `short_id` to its original URL and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the identifier was never minted.
    pub fn expand(&self, short_id: &str) -> Result<String, ShortenerError> {
        let record = self.store.get_and_hit(short_id)?;
        Ok(record.original_url)
    }

    /// Lists every stored mapping. Order is unspecified.
    pub fn list(&self) -> Vec<ListEntry> {
        self.store
            .enumerate()
            .into_iter()
            .map(|(hash, record)| ListEntry::from_record(hash, record))
            .collect()
    }

    /// Constructs the full short URL from the configured domain and code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.short_url_domain.trim_end_matches('/'), code)
    }

    /// Number of stored identifiers.
    pub fn count(&self) -> usize {
        self.store.len()
    }
}
