//! DTOs for the listing endpoint.

use serde::Serialize;

use crate::domain::entities::ListEntry;

/// One mapping in the `GET /list` response array.
#[derive(Debug, Serialize)]
pub struct ListItem {
    pub hash: String,
    pub original_url: String,
    pub hits: u64,
}

impl From<ListEntry> for ListItem {
    fn from(entry: ListEntry) -> Self {
        Self {
            hash: entry.hash,
            original_url: entry.original_url,
            hits: entry.hits,
        }
    }
}
