// ============================================================================
// Expense API - Group Handlers
// File: crates/expense-api/src/handlers/groups.rs
// ============================================================================
//! Group HTTP handlers (create, get, list)

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::warn;

use expense_core::{CreateGroupInput, Group, GROUP_FIELDS_REQUIRED};
use expense_shared::Pagination;

use crate::error::ApiError;
use crate::state::AppState;

/// Create group handler - POST /api/groups
///
/// Any body that does not parse as `{ name, createdBy }` strings is answered
/// like a missing field.
pub async fn create_group(
    State(state): State<AppState>,
    payload: Result<Json<CreateGroupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!("Unreadable create group body: {}", rejection.body_text());
        ApiError::BadRequest(GROUP_FIELDS_REQUIRED.to_string())
    })?;

    let group = state.group_service.create_group(input).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Get group handler - GET /api/groups/{id}
pub async fn get_group(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Group>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::BadRequest("Invalid group id".to_string()))?;

    let group = state.group_service.get_group(id).await?;
    Ok(Json(group))
}

/// List groups handler - GET /api/groups?page=&per_page=
pub async fn list_groups(
    State(state): State<AppState>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let Query(pagination) =
        pagination.map_err(|_| ApiError::BadRequest("Invalid pagination parameters".to_string()))?;

    let groups = state.group_service.list_groups(&pagination).await?;
    Ok(Json(groups))
}
