//! Dining table API module

mod handler;

use axum::{Router, routing::{delete, get}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .put(handler::update)
                .delete(handler::delete_by_body),
        )
        .route("/{id}", delete(handler::delete))
}
