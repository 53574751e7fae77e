//! # Hash Shortener
//!
//! A small URL shortening service built with Axum. Mappings live in memory
//! and are periodically written to a JSON snapshot file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Redirection records, errors and the store trait
//! - **Application Layer** ([`application`]) - Short identifier generation and lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and snapshot persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Identifiers
//!
//! A short identifier is the first 7 hex characters of
//! `SHA-256(url + counter)`. The counter starts at 0 and is bumped until an
//! unused identifier is found, so the same URL shortened twice yields two
//! different identifiers.
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_URL_DOMAIN="http://localhost:8080"
//! export SNAPSHOT_PATH="snapshot.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{ListEntry, RedirectionRecord};
    pub use crate::domain::repositories::RedirectionStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryStore;
    pub use crate::infrastructure::snapshot::{RestoreOutcome, SnapshotManager};
    pub use crate::state::{AppState, SharedStore};
}
