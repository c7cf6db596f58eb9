//! Monitor row model.

use npc_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `monitors` table.
///
/// Monitors are a read-only catalog in this slice; there are no write
/// DTOs.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Monitor {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// e.g. `"2560x1440"`.
    pub resolution: String,
    /// Refresh rate in Hz.
    pub refresh_rate: i32,
    /// e.g. `"IPS"`, `"VA"`.
    pub panel_type: String,
    /// Diagonal in inches.
    pub screen_size: f64,
    /// Price in IDR, zero decimal places.
    pub price: i64,
    /// Editorial rating, 0.0 to 5.0.
    pub rating: f64,
    pub featured: bool,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
