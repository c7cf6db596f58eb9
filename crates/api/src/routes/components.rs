//! Route definitions for the `/components` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::components;
use crate::state::AppState;

/// Component catalog routes mounted at `/components`.
///
/// ```text
/// GET    /        -> list_components (?category=CPU)
/// POST   /        -> create_component (admin)
/// GET    /{id}    -> get_component
/// PUT    /{id}    -> update_component (admin)
/// DELETE /{id}    -> delete_component (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(components::list_components).post(components::create_component),
        )
        .route(
            "/{id}",
            get(components::get_component)
                .put(components::update_component)
                .delete(components::delete_component),
        )
}
