//! Repository for the `monitors` table (read-only catalog).

use npc_core::types::DbId;
use sqlx::PgPool;

use crate::models::monitor::Monitor;

const COLUMNS: &str = "id, title, description, resolution, refresh_rate, panel_type, \
                       screen_size, price, rating, featured, image_url, created_at, updated_at";

/// Provides read operations for monitors.
pub struct MonitorRepo;

impl MonitorRepo {
    /// List all monitors ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Monitor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monitors ORDER BY title");
        sqlx::query_as::<_, Monitor>(&query).fetch_all(pool).await
    }

    /// List featured monitors only, best-rated first.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Monitor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM monitors WHERE featured ORDER BY rating DESC, title");
        sqlx::query_as::<_, Monitor>(&query).fetch_all(pool).await
    }

    /// Find a monitor by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Monitor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monitors WHERE id = $1");
        sqlx::query_as::<_, Monitor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
