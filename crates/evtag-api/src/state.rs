//! Application state shared across all route handlers.
//!
//! Passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use evtag_classifier::TagClassifier;
use evtag_core::config::ServerConfig;
use evtag_core::EventStore;

/// Shared application state.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Server settings (CORS, body limit).
    pub server: Arc<ServerConfig>,
    /// In-memory event store.
    pub store: Arc<EventStore>,
    /// Tag classifier wrapping the configured model.
    pub classifier: TagClassifier,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with an empty store.
    pub fn new(server: ServerConfig, classifier: TagClassifier) -> Self {
        Self {
            server: Arc::new(server),
            store: Arc::new(EventStore::new()),
            classifier,
            start_time: Instant::now(),
        }
    }
}
