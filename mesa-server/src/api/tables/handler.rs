//! Dining table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use shared::request::DeleteByIdRequest;
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::db::repository::{RepoError, dining_table};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.pool).await?;
    Ok(Json(tables))
}

/// POST /api/tables
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate(&payload.name, payload.seats)?;
    let table = DiningTable {
        id: payload
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(shared::util::new_id),
        name: payload.name,
        seats: payload.seats,
    };
    let table = dining_table::create(&state.pool, &table).await?;
    tracing::info!(table_id = %table.id, name = %table.name, "Table created");
    Ok(Json(table))
}

/// PUT /api/tables - full update, id in the body
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    validate(&payload.name, payload.seats)?;
    let id = payload.id.clone();
    let table = dining_table::update(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => {
                AppError::new(ErrorCode::TableNotFound).with_detail("id", id)
            }
            other => other.into(),
        })?;
    Ok(Json(table))
}

/// DELETE /api/tables - id in the body
pub async fn delete_by_body(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteByIdRequest>,
) -> AppResult<Json<SuccessResponse>> {
    remove(&state, &payload.id).await
}

/// DELETE /api/tables/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    remove(&state, &id).await
}

async fn remove(state: &ServerState, id: &str) -> AppResult<Json<SuccessResponse>> {
    if dining_table::delete(&state.pool, id).await? {
        tracing::info!(table_id = %id, "Table deleted");
    }
    Ok(Json(SuccessResponse::ok()))
}

fn validate(name: &str, seats: i64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::required("name"));
    }
    if seats <= 0 {
        return Err(AppError::validation("seats must be positive").with_detail("seats", seats));
    }
    Ok(())
}
