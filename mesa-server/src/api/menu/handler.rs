//! Menu API Handlers
//!
//! Menu prices are the only prices orders ever use, so they are validated here.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::db::repository::{RepoError, menu};
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/menu
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/menu
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate(&payload.name, payload.price)?;
    let id = payload
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(shared::util::new_id);

    let item = menu::create(&state.pool, &id, payload).await?;
    tracing::info!(menu_item_id = %item.id, price = item.price, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu/:id - replace name, category, price, description and image
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate(&payload.name, payload.price)?;
    let item = menu::update(&state.pool, &id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => {
                AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id.clone())
            }
            other => other.into(),
        })?;
    tracing::info!(menu_item_id = %item.id, price = item.price, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/menu/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if menu::delete(&state.pool, &id).await? {
        tracing::info!(menu_item_id = %id, "Menu item deleted");
    }
    Ok(Json(SuccessResponse::ok()))
}

fn validate(name: &str, price: f64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::required("name"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::new(ErrorCode::MenuItemInvalidPrice).with_detail("price", price));
    }
    Ok(())
}
