use std::sync::Arc;

use wayfarer_cache::Cache;
use wayfarer_content::ContentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// All three store handles are constructed once in `main` and injected
/// here -- no ambient globals. Cheaply cloneable (inner data is behind
/// `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Structured-store connection pool.
    pub pool: wayfarer_db::DbPool,
    /// Flexible-store handle (process-wide MongoDB client).
    pub content: ContentStore,
    /// Cache-layer handle (process-wide Redis handle).
    pub cache: Cache,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
