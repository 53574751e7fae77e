//! Infrastructure layer for storage and durability.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Store implementations
//! - [`snapshot`] - Periodic JSON snapshots of a store

pub mod persistence;
pub mod snapshot;
