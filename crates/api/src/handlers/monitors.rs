//! Handlers for the `/monitors` resource (read-only catalog).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use npc_core::error::CoreError;
use npc_core::types::DbId;
use npc_db::repositories::MonitorRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /monitors`.
#[derive(Debug, Deserialize)]
pub struct ListMonitorsQuery {
    /// When true, only featured monitors are returned.
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/v1/monitors
pub async fn list_monitors(
    State(state): State<AppState>,
    Query(query): Query<ListMonitorsQuery>,
) -> AppResult<impl IntoResponse> {
    let monitors = if query.featured {
        MonitorRepo::list_featured(&state.pool).await?
    } else {
        MonitorRepo::list(&state.pool).await?
    };

    Ok(Json(DataResponse { data: monitors }))
}

/// GET /api/v1/monitors/:id
pub async fn get_monitor(
    State(state): State<AppState>,
    Path(monitor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let monitor = MonitorRepo::find_by_id(&state.pool, monitor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Monitor",
            id: monitor_id,
        }))?;

    Ok(Json(DataResponse { data: monitor }))
}
