//! Handler for the mapping listing.

use axum::{Json, extract::State};

use crate::api::dto::list::ListItem;
use crate::state::AppState;

/// Lists every short link with its hit count.
///
/// # Endpoint
///
/// `GET /list`
///
/// # Response
///
/// ```json
/// [
///   { "hash": "246f633", "original_url": "https://www.example.com/page", "hits": 1 }
/// ]
/// ```
///
/// Order is unspecified. An empty store yields `[]`.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<ListItem>> {
    let items = state
        .shortener
        .list()
        .into_iter()
        .map(ListItem::from)
        .collect();

    Json(items)
}
