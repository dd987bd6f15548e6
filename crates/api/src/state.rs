use std::sync::Arc;

use drama_db::repositories::DramaRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// CRUD and search over the active record store.
    pub repo: Arc<DramaRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
