//! File snapshots of the redirection store.
//!
//! A snapshot is a single JSON object holding the whole store, rewritten on a
//! fixed interval by a background task and read back once at startup.

pub mod snapshot_manager;

pub use snapshot_manager::{
    RestoreOutcome, SaveFailurePolicy, SnapshotError, SnapshotManager, SnapshotTask,
};
