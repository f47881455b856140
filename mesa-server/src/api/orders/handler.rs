//! Order API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::request::WaiterAssertion;
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::orders::query;
use crate::utils::{AppJson, AppResult};

/// GET /api/orders - all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = query::list_orders(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = query::get_order(&state.pool, &id).await?;
    Ok(Json(order))
}

/// POST /api/orders - create from a client submission
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.create(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders.update(&id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id
///
/// The body is optional; an empty or unreadable body asserts no waiter.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<SuccessResponse>> {
    let assertion: WaiterAssertion = serde_json::from_slice(&body).unwrap_or_default();
    state
        .orders
        .delete(&id, assertion.waiter_name.as_deref())
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
