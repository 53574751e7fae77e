//! Store trait definitions for the domain layer.
//!
//! The store abstracts the key-value container holding redirection records.
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated with `mockall` for service tests.

pub mod redirection_store;

pub use redirection_store::{RedirectionMap, RedirectionStore};

#[cfg(test)]
pub use redirection_store::MockRedirectionStore;
