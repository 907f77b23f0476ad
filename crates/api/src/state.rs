use std::sync::Arc;

use saved_items_db::repositories::SavedItemsRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Saved-items store.
    pub repo: Arc<dyn SavedItemsRepo>,
    /// Server configuration (read by the identity gate).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repo: Arc<dyn SavedItemsRepo>, config: ServerConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }
}
