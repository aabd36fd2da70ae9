use std::sync::Arc;

use snipbin_db::SnippetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store wraps a pool handle, config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Snippet store over the database connection pool.
    pub store: SnippetStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
