//! Bearer-token authentication.
//!
//! Handlers opt in by taking [`AuthUser`] as a parameter; extraction
//! fails with 401 before the handler body runs, so a handler that
//! receives an `AuthUser` can rely on a verified token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use npc_core::error::CoreError;
use npc_core::types::DbId;

use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// The identity behind a verified access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// `"admin"` or `"user"`, straight from the token claims.
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Authorization header is not a bearer token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = state
            .config
            .jwt
            .verify_access_token(token)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(claims.into())
    }
}
