//! Read-only catalog collaborator for the build wizard.

use npc_core::catalog::Part;
use npc_db::repositories::ComponentRepo;
use npc_db::DbPool;

/// The source of available parts, injected into handlers through
/// [`AppState`](crate::state::AppState).
///
/// Fetch failures degrade to an empty catalog: the wizard renders empty
/// slots instead of an error state. The failure is logged but never
/// surfaced to the caller.
#[derive(Clone)]
pub struct Catalog {
    pool: DbPool,
}

impl Catalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List every part in the catalog.
    ///
    /// Rows whose category tag falls outside the eight fixed slots are
    /// dropped. Repository errors are swallowed and reported as an empty
    /// sequence.
    pub async fn list_parts(&self) -> Vec<Part> {
        match ComponentRepo::list(&self.pool).await {
            Ok(rows) => rows.into_iter().filter_map(|row| row.into_part()).collect(),
            Err(err) => {
                tracing::error!(error = %err, "Catalog fetch failed; treating catalog as empty");
                Vec::new()
            }
        }
    }
}
