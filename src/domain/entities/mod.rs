//! Core domain entities.
//!
//! - [`RedirectionRecord`] - The value stored under a short identifier
//! - [`ListEntry`] - Flattened `(hash, record)` pair returned by listings

pub mod redirection;

pub use redirection::{ListEntry, RedirectionRecord};
