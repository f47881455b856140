//! Inventory API Handlers

use axum::{Json, extract::State};
use shared::models::{InventoryItem, InventoryItemInput};
use shared::request::DeleteByIdRequest;
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::db::repository::{RepoError, inventory};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/inventory - ordered by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let items = inventory::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/inventory
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<InventoryItemInput>,
) -> AppResult<Json<InventoryItem>> {
    let id = payload
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(shared::util::new_id);
    let item = into_item(id, payload)?;

    inventory::create(&state.pool, &item).await?;
    if item.is_low() {
        tracing::warn!(item = %item.name, quantity = item.quantity, "Inventory item below minimum");
    }
    Ok(Json(item))
}

/// PUT /api/inventory - full update, id in the body
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<InventoryItemInput>,
) -> AppResult<Json<InventoryItem>> {
    let Some(id) = payload.id.clone().filter(|id| !id.is_empty()) else {
        return Err(AppError::required("id"));
    };
    let item = into_item(id, payload)?;

    inventory::update(&state.pool, &item)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => {
                AppError::new(ErrorCode::InventoryItemNotFound).with_detail("id", item.id.clone())
            }
            other => other.into(),
        })?;
    if item.is_low() {
        tracing::warn!(item = %item.name, quantity = item.quantity, "Inventory item below minimum");
    }
    Ok(Json(item))
}

/// DELETE /api/inventory - id in the body
pub async fn delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteByIdRequest>,
) -> AppResult<Json<SuccessResponse>> {
    if inventory::delete(&state.pool, &payload.id).await? {
        tracing::info!(item_id = %payload.id, "Inventory item deleted");
    }
    Ok(Json(SuccessResponse::ok()))
}

fn into_item(id: String, input: InventoryItemInput) -> AppResult<InventoryItem> {
    if input.name.trim().is_empty() {
        return Err(AppError::required("name"));
    }
    if !input.quantity.is_finite() || !input.min_quantity.is_finite() {
        return Err(AppError::validation("quantities must be finite numbers"));
    }
    Ok(InventoryItem {
        id,
        name: input.name,
        unit: input.unit,
        quantity: input.quantity,
        min_quantity: input.min_quantity,
    })
}
