//! Domain layer containing business entities and store contracts.
//!
//! This module defines the redirection data model, the store capability trait
//! and the error types shared by the application and infrastructure layers.
//! It has no dependencies on HTTP, files or configuration.
//!
//! # Architecture
//!
//! - [`entities`] - Redirection records and listing projections
//! - [`repositories`] - The [`repositories::RedirectionStore`] contract
//! - [`errors`] - Store and shortener error kinds
//!
//! # Data Flow
//!
//! 1. The snapshot manager restores a [`repositories::RedirectionStore`] at startup
//! 2. [`crate::application::services::ShortenerService`] mints and resolves identifiers
//! 3. The snapshot manager exports the store to disk on a fixed interval

pub mod entities;
pub mod errors;
pub mod repositories;
