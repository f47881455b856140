//! Ledger API module
//!
//! Every route requires `x-staff-role: manager`.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::core::ServerState;
use crate::middleware::require_manager;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/transactions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .layer(middleware::from_fn(require_manager))
}
