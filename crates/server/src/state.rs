use std::sync::Arc;

use axum::http::StatusCode;
use configs::AppConfig;
use service::items::ItemStore;

/// Shared handler state. The store is injected so every router (and every
/// test) can own its own instance.
#[derive(Clone)]
pub struct ServerState {
    pub item_store: Arc<dyn ItemStore>,
    /// Port reported by the root greeting.
    pub port: u16,
    pub legacy_conflict_status: bool,
}

impl ServerState {
    pub fn new(item_store: Arc<dyn ItemStore>, config: &AppConfig) -> Self {
        Self {
            item_store,
            port: config.server.port,
            legacy_conflict_status: config.api.legacy_conflict_status,
        }
    }

    /// Status used when a create hits an existing id.
    pub fn conflict_status(&self) -> StatusCode {
        if self.legacy_conflict_status {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::CONFLICT
        }
    }
}
