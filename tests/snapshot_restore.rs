mod common;

use std::sync::Arc;
use std::time::Duration;

use hash_shortener::domain::repositories::RedirectionStore;
use hash_shortener::infrastructure::persistence::InMemoryStore;
use hash_shortener::infrastructure::snapshot::{RestoreOutcome, SnapshotManager};
use hash_shortener::state::AppState;
use tempfile::TempDir;

#[tokio::test]
async fn test_state_survives_save_and_restore() {
    let dir = TempDir::new().unwrap();
    let manager = SnapshotManager::new(dir.path().join("snapshot.db"), Duration::from_secs(5));

    let (state, store) = common::create_test_state();
    let first = state.shortener.shorten("https://www.example.com/page").unwrap();
    let second = state.shortener.shorten("https://rust-lang.org").unwrap();
    state.shortener.expand(&first).unwrap();
    state.shortener.expand(&first).unwrap();

    let saved = manager.flush(store).await.unwrap();
    assert_eq!(saved, 2);

    let restored = Arc::new(InMemoryStore::new());
    let outcome = manager.restore(restored.as_ref()).unwrap();
    assert_eq!(outcome, RestoreOutcome::Restored(2));

    let state = AppState::new(restored.clone(), common::TEST_DOMAIN);
    assert_eq!(
        state.shortener.expand(&first).unwrap(),
        "https://www.example.com/page"
    );
    assert_eq!(
        state.shortener.expand(&second).unwrap(),
        "https://rust-lang.org"
    );
    assert_eq!(restored.get(&first).unwrap().hits, 3);
    assert_eq!(restored.get(&second).unwrap().hits, 1);
}

#[tokio::test]
async fn test_restored_store_keeps_minting_fresh_hashes() {
    let dir = TempDir::new().unwrap();
    let manager = SnapshotManager::new(dir.path().join("snapshot.db"), Duration::from_secs(5));

    let (state, store) = common::create_test_state();
    assert_eq!(state.shortener.shorten("https://example.com").unwrap(), "4a89bbe");
    manager.flush(store).await.unwrap();

    let restored = Arc::new(InMemoryStore::new());
    manager.restore(restored.as_ref()).unwrap();

    let state = AppState::new(restored, common::TEST_DOMAIN);
    assert_eq!(state.shortener.shorten("https://example.com").unwrap(), "614fb00");
}

#[tokio::test]
async fn test_periodic_task_persists_new_links() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.db");
    let manager = SnapshotManager::new(&path, Duration::from_millis(50));

    let (state, store) = common::create_test_state();
    let task = manager.spawn_periodic(store);

    let hash = state.shortener.shorten("https://rust-lang.org").unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    task.shutdown().await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json[&hash]["OriginalURL"], "https://rust-lang.org");
    assert_eq!(json[&hash]["Hits"], 0);
}
