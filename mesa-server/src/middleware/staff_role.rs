//! Manager gate for the financial ledger
//!
//! The role is whatever the client puts in `x-staff-role`; there is no
//! session behind it.

use axum::{extract::Request, middleware::Next, response::Response};
use shared::{AppError, ErrorCode};

/// Header carrying the role of the logged-in staff member
pub const STAFF_ROLE_HEADER: &str = "x-staff-role";

/// Require `x-staff-role: manager`
///
/// # Errors
///
/// Any other value (or none) returns 403 with [`ErrorCode::ManagerRequired`]
pub async fn require_manager(req: Request, next: Next) -> Result<Response, AppError> {
    let role = req
        .headers()
        .get(STAFF_ROLE_HEADER)
        .and_then(|v| v.to_str().ok());

    if role != Some("manager") {
        tracing::warn!(
            role = ?role,
            path = %req.uri().path(),
            "Ledger access denied"
        );
        return Err(AppError::new(ErrorCode::ManagerRequired));
    }

    Ok(next.run(req).await)
}
