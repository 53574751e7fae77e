#![allow(dead_code)]

use std::sync::Arc;

use hash_shortener::domain::entities::RedirectionRecord;
use hash_shortener::domain::repositories::RedirectionStore;
use hash_shortener::infrastructure::persistence::InMemoryStore;
use hash_shortener::state::AppState;

pub const TEST_DOMAIN: &str = "http://localhost:8080";

/// Builds an [`AppState`] over a fresh store and returns the store too, so
/// tests can inspect it directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), TEST_DOMAIN);
    (state, store)
}

pub fn create_test_link(store: &InMemoryStore, hash: &str, url: &str) {
    store
        .set(hash, RedirectionRecord::new(url))
        .unwrap();
}

pub fn create_visited_link(store: &InMemoryStore, hash: &str, url: &str, hits: u64) {
    store
        .set(hash, RedirectionRecord::with_hits(url, hits))
        .unwrap();
}
