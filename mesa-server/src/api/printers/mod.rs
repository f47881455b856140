//! Printer API module

mod handler;

use axum::{Router, routing::{get, post}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/printers", get(handler::list))
        .route("/api/print", post(handler::print))
}
