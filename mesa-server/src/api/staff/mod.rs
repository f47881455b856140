//! Staff API module

mod handler;

use axum::{Router, routing::{delete, get, post}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .delete(handler::delete_by_body),
        )
        .route("/login", post(handler::login))
        .route("/{id}", delete(handler::delete))
}
