//! Route definitions for the `/monitors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::monitors;
use crate::state::AppState;

/// Monitor catalog routes mounted at `/monitors`.
///
/// ```text
/// GET /        -> list_monitors (?featured=true)
/// GET /{id}    -> get_monitor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(monitors::list_monitors))
        .route("/{id}", get(monitors::get_monitor))
}
