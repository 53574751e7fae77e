//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /short`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "url": "http://localhost:8080/246f633" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or the URL is empty or
/// not an absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let code = state.shortener.shorten(&payload.url)?;
    let url = state.shortener.short_url(&code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { url })))
}
