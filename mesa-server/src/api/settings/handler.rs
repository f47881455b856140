//! Settings API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};
use shared::models::{SettingEntry, SettingValue};
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::db::repository::setting;
use crate::utils::{AppJson, AppResult};

/// GET /api/config
pub async fn get_config(State(state): State<ServerState>) -> AppResult<Json<Map<String, Value>>> {
    let rows = setting::find_all(&state.pool).await?;
    let config = rows
        .into_iter()
        .map(|row| {
            let value = row.decoded_value();
            (row.key, value)
        })
        .collect();
    Ok(Json(config))
}

/// POST /api/config - body `{ key: value, ... }`
pub async fn save_config(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<SuccessResponse>> {
    setting::upsert_many(&state.pool, &payload).await?;
    tracing::info!(keys = payload.len(), "Settings saved");
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/settings/:key
pub async fn get_setting(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<SettingValue>> {
    let value = setting::find(&state.pool, &key)
        .await?
        .map(|row| row.decoded_value())
        .unwrap_or(Value::Null);
    Ok(Json(SettingValue { value }))
}

/// POST /api/settings/:key - body `{ value }`
pub async fn save_setting(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    AppJson(payload): AppJson<SettingValue>,
) -> AppResult<Json<SettingEntry>> {
    setting::upsert(&state.pool, &key, &payload.value).await?;
    tracing::debug!(key = %key, "Setting saved");
    Ok(Json(SettingEntry {
        key,
        value: payload.value,
    }))
}
