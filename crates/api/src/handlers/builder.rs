//! Handlers for the `/builder` resource (the build-your-own-PC wizard).
//!
//! Each request replays the client's slot selection through a fresh
//! [`BuildSession`] fed from the catalog. The session is never shared
//! between requests; all derived state is recomputed per call.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use npc_core::builder::BuildSession;
use npc_core::catalog::{Part, PartCategory};
use npc_core::currency::format_idr;
use npc_core::error::CoreError;
use npc_core::export::{sheet_rows, SheetRow};
use npc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for quote and export: category tag -> selected part id.
///
/// Slots may be omitted. Unknown category tags are rejected; selections
/// referencing parts no longer in the catalog are skipped silently.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub selection: HashMap<String, DbId>,
}

/// One slot in a quote response.
#[derive(Debug, Serialize)]
pub struct SlotQuote {
    pub category: &'static str,
    pub part: Option<Part>,
}

/// Response body for `POST /builder/quote`.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// All eight slots in display order.
    pub slots: Vec<SlotQuote>,
    pub total_price: i64,
    pub formatted_total: String,
    pub issues: Vec<String>,
    pub can_export: bool,
}

/// Response body for `POST /builder/export`: the ordered rows consumed by
/// the PDF collaborator, plus the print timestamp.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub printed_at: Timestamp,
    pub rows: Vec<SheetRow>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/builder/quote
///
/// Price and compatibility summary for a slot selection.
pub async fn quote(
    State(state): State<AppState>,
    Json(input): Json<SelectionRequest>,
) -> AppResult<Json<DataResponse<QuoteResponse>>> {
    let session = build_session(&state, &input.selection).await?;

    let slots = PartCategory::ALL
        .iter()
        .map(|&category| SlotQuote {
            category: category.as_str(),
            part: session.slot(category).cloned(),
        })
        .collect();

    let total_price = session.total_price();

    Ok(Json(DataResponse {
        data: QuoteResponse {
            slots,
            total_price,
            formatted_total: format_idr(total_price),
            issues: session.compatibility_issues(),
            can_export: session.can_export(),
        },
    }))
}

/// POST /api/v1/builder/export
///
/// The build-sheet rows for PDF export. Rejected with 409 when the build
/// has compatibility issues or no parts selected.
pub async fn export(
    State(state): State<AppState>,
    Json(input): Json<SelectionRequest>,
) -> AppResult<Json<DataResponse<ExportResponse>>> {
    let session = build_session(&state, &input.selection).await?;

    if !session.can_export() {
        return Err(AppError::Core(CoreError::Conflict(
            "Build is not exportable: resolve compatibility issues and select at least one part"
                .into(),
        )));
    }

    Ok(Json(DataResponse {
        data: ExportResponse {
            printed_at: chrono::Utc::now(),
            rows: sheet_rows(&session),
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Replay a raw selection through a fresh [`BuildSession`].
///
/// The catalog pre-filters by category: a selected id only fills a slot
/// when a part with that id exists in that category. Stale ids degrade to
/// an empty slot rather than an error.
async fn build_session(
    state: &AppState,
    selection: &HashMap<String, DbId>,
) -> AppResult<BuildSession> {
    let parts = state.catalog.list_parts().await;

    let mut session = BuildSession::new();
    for (tag, part_id) in selection {
        let category = PartCategory::parse(tag).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown part category: {tag}"
            )))
        })?;

        if let Some(part) = parts
            .iter()
            .find(|p| p.id == *part_id && p.category == category)
        {
            session.select_part(category, part.clone());
        }
    }

    Ok(session)
}
