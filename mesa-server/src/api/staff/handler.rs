//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{StaffCreate, StaffLogin, StaffMember, StaffRole, StaffSession};
use shared::request::DeleteByIdRequest;
use shared::response::SuccessResponse;

use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::{AppError, AppJson, AppResult, ErrorCode};

/// GET /api/staff
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffMember>>> {
    let members = staff::find_all(&state.pool).await?;
    Ok(Json(members))
}

/// POST /api/staff
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StaffCreate>,
) -> AppResult<Json<StaffMember>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::required("name"));
    }
    if payload.pin.is_empty() {
        return Err(AppError::required("pin"));
    }
    let role: StaffRole = payload.role.parse().map_err(|_| {
        AppError::new(ErrorCode::InvalidStaffRole).with_detail("role", payload.role.clone())
    })?;

    let member = StaffMember {
        id: payload
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(shared::util::new_id),
        name: payload.name,
        role,
        pin: payload.pin,
    };
    let member = staff::create(&state.pool, &member).await?;
    tracing::info!(staff_id = %member.id, role = %member.role, "Staff member created");
    Ok(Json(member))
}

/// POST /api/staff/login - name + PIN
pub async fn login(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StaffLogin>,
) -> AppResult<Json<StaffSession>> {
    let name = payload.name.as_deref().filter(|n| !n.is_empty());
    let pin = payload.pin.as_deref().filter(|p| !p.is_empty());
    let (Some(name), Some(pin)) = (name, pin) else {
        return Err(AppError::invalid("Name and PIN are required"));
    };

    match staff::find_by_credentials(&state.pool, name, pin).await? {
        Some(session) => {
            tracing::info!(staff_id = %session.id, role = %session.role, "Staff login");
            Ok(Json(session))
        }
        None => {
            tracing::warn!(name = %name, "Staff login rejected");
            Err(AppError::invalid_credentials())
        }
    }
}

/// DELETE /api/staff - id in the body
pub async fn delete_by_body(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteByIdRequest>,
) -> AppResult<Json<SuccessResponse>> {
    remove(&state, &payload.id).await
}

/// DELETE /api/staff/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    remove(&state, &id).await
}

async fn remove(state: &ServerState, id: &str) -> AppResult<Json<SuccessResponse>> {
    if staff::delete(&state.pool, id).await? {
        tracing::info!(staff_id = %id, "Staff member deleted");
    }
    Ok(Json(SuccessResponse::ok()))
}
