//! Store implementations.
//!
//! - [`InMemoryStore`] - Process-local map guarded by a reader-writer lock

pub mod in_memory_store;

pub use in_memory_store::InMemoryStore;
