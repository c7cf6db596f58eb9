use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc` or is already `Clone`.
/// Collaborators (catalog, pool) are injected here explicitly -- there
/// are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: npc_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only parts catalog used by the build wizard.
    pub catalog: Catalog,
}
