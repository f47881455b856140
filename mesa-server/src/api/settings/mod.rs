//! Settings API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/config | GET | All settings as one object |
//! | /api/config | POST | Upsert every key of the body |
//! | /api/settings/{key} | GET | `{ value }`, null when unset |
//! | /api/settings/{key} | POST | Upsert `{ value }` |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/config", get(handler::get_config).post(handler::save_config))
        .route(
            "/api/settings/{key}",
            get(handler::get_setting).post(handler::save_setting),
        )
}
