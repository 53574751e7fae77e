//! Application layer services implementing business logic.
//!
//! Services consume the store trait from [`crate::domain::repositories`] and
//! provide a synchronous API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten, expand and list

pub mod services;
