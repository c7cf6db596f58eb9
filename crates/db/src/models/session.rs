//! Refresh-token session model and DTOs.

use npc_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `sessions` table.
///
/// Only the SHA-256 hash of the refresh token is stored; the plaintext
/// never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a session.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
