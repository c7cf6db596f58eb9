//! Handlers for the `/components` resource (PC part catalog).
//!
//! Reads are public; writes are admin only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use npc_core::catalog::PartCategory;
use npc_core::error::CoreError;
use npc_core::types::DbId;
use npc_db::models::component::{CreateComponent, UpdateComponent};
use npc_db::repositories::ComponentRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /components`.
#[derive(Debug, Deserialize)]
pub struct ListComponentsQuery {
    /// Filter by category tag (`"CPU"`, `"GPU"`, ...). Unknown tags are
    /// rejected with 400.
    pub category: Option<String>,
}

/// GET /api/v1/components
///
/// List the catalog, optionally filtered by category.
pub async fn list_components(
    State(state): State<AppState>,
    Query(query): Query<ListComponentsQuery>,
) -> AppResult<impl IntoResponse> {
    let components = match &query.category {
        Some(tag) => {
            let category = PartCategory::parse(tag).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Unknown part category: {tag}"
                )))
            })?;
            ComponentRepo::list_by_category(&state.pool, category.as_str()).await?
        }
        None => ComponentRepo::list(&state.pool).await?,
    };

    Ok(Json(DataResponse { data: components }))
}

/// GET /api/v1/components/:id
pub async fn get_component(
    State(state): State<AppState>,
    Path(component_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let component = ComponentRepo::find_by_id(&state.pool, component_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id: component_id,
        }))?;

    Ok(Json(DataResponse { data: component }))
}

/// POST /api/v1/components
///
/// Create a catalog entry (admin only).
pub async fn create_component(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateComponent>,
) -> AppResult<impl IntoResponse> {
    validate_component_fields(Some(&input.name), Some(input.price))?;

    let component = ComponentRepo::create(&state.pool, &input).await?;

    tracing::info!(
        component_id = component.id,
        name = %component.name,
        category = %component.category,
        user_id = admin.user_id,
        "Component created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: component })))
}

/// PUT /api/v1/components/:id
///
/// Partially update a catalog entry (admin only).
pub async fn update_component(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(component_id): Path<DbId>,
    Json(input): Json<UpdateComponent>,
) -> AppResult<impl IntoResponse> {
    validate_component_fields(input.name.as_deref(), input.price)?;

    let component = ComponentRepo::update(&state.pool, component_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id: component_id,
        }))?;

    tracing::info!(component_id, user_id = admin.user_id, "Component updated");

    Ok(Json(DataResponse { data: component }))
}

/// DELETE /api/v1/components/:id
///
/// Remove a catalog entry (admin only). Returns 204.
pub async fn delete_component(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(component_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ComponentRepo::delete(&state.pool, component_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Component",
            id: component_id,
        }));
    }

    tracing::info!(component_id, user_id = admin.user_id, "Component deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Shared field validation for create/update payloads.
fn validate_component_fields(name: Option<&str>, price: Option<i64>) -> AppResult<()> {
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Component name must not be empty".into(),
            )));
        }
    }
    if let Some(price) = price {
        if price < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Price must not be negative".into(),
            )));
        }
    }
    Ok(())
}
