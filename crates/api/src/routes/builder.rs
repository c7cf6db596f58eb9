//! Route definitions for the `/builder` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::builder;
use crate::state::AppState;

/// Build-wizard routes mounted at `/builder`.
///
/// ```text
/// POST /quote     -> quote
/// POST /export    -> export
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(builder::quote))
        .route("/export", post(builder::export))
}
