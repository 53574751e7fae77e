//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{hash}`
///
/// Every successful redirect counts as one hit.
///
/// # Errors
///
/// Returns 400 Bad Request if `hash` is not 7 alphanumeric characters.
/// Returns 404 Not Found if the hash was never minted.
pub async fn redirect_handler(
    Path(hash): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_code(&hash) {
        return Err(AppError::bad_request("invalid hash", json!({ "hash": hash })));
    }

    let long_url = state.shortener.expand(&hash)?;
    debug!(hash = %hash, "Redirecting to {}", long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
