pub mod auth;
pub mod builder;
pub mod components;
pub mod health;
pub mod monitors;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login (public)
/// /auth/refresh               refresh (public)
/// /auth/logout                logout (requires auth)
/// /auth/me                    current user (requires auth)
///
/// /components                 list (public), create (admin)
/// /components/{id}            get (public), update/delete (admin)
///
/// /monitors                   list (?featured=true)
/// /monitors/{id}              get
///
/// /builder/quote              price + compatibility summary (POST)
/// /builder/export             build-sheet rows for PDF export (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/components", components::router())
        .nest("/monitors", monitors::router())
        .nest("/builder", builder::router())
}
