//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::RedirectionStore;

/// Store handle shared by the shortener and the snapshot task.
pub type SharedStore = Arc<dyn RedirectionStore>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<dyn RedirectionStore>>,
}

impl AppState {
    pub fn new(store: SharedStore, short_url_domain: impl Into<String>) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store, short_url_domain)),
        }
    }
}
