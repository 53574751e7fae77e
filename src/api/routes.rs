//! API route configuration.

use crate::api::handlers::{list_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and listing routes.
///
/// # Endpoints
///
/// - `POST /short` - Create a short URL
/// - `GET  /list`  - List all mappings with hit counts
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/short", post(shorten_handler))
        .route("/list", get(list_handler))
}
