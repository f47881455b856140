//! Shared types for the Mesa restaurant service
//!
//! Common types used across crates: error codes and the HTTP error body,
//! domain models and request/response DTOs, serde helpers and utilities.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod serde_helpers;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use http;
pub use serde::{Deserialize, Serialize};
