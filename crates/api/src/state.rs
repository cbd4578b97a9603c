use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted and the config sits behind
/// an `Arc`. Handlers keep nothing else between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quotes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
