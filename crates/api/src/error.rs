//! HTTP error handling.
//!
//! Every failure leaving a handler becomes a JSON body of the shape
//! `{ "error": <message>, "code": <machine code> }`. Domain errors map
//! statically; database errors pass through [`AppError::database_parts`],
//! which only surfaces conditions a client can act on (missing row,
//! duplicate key) and sanitizes the rest.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use npc_core::error::CoreError;
use serde::Serialize;

/// Unique-constraint violation (SQLSTATE).
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    const INTERNAL: (StatusCode, &'static str) =
        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR");

    /// Status, code, and client-safe message for this error. Sanitized
    /// paths log the real cause here before discarding it.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => Self::core_parts(core),
            AppError::Database(err) => Self::database_parts(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                let (status, code) = Self::INTERNAL;
                (status, code, "An internal error occurred".to_string())
            }
        }
    }

    fn core_parts(core: &CoreError) -> (StatusCode, &'static str, String) {
        match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            CoreError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                let (status, code) = Self::INTERNAL;
                (status, code, "An internal error occurred".to_string())
            }
        }
    }

    /// A missing row is 404; a `uq_*` unique violation is 409 (the
    /// migrations name every unique constraint with that prefix).
    /// Everything else is logged and sanitized to a 500.
    fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
        if matches!(err, sqlx::Error::RowNotFound) {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            );
        }

        if let sqlx::Error::Database(db) = err {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                if let Some(constraint) = db.constraint().filter(|c| c.starts_with("uq_")) {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
        }

        tracing::error!(error = %err, "Database error");
        let (status, code) = Self::INTERNAL;
        (status, code, "An internal error occurred".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}
