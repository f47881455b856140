//! Utilities
//!
//! - [`logger`] - tracing subscriber set-up
//! - [`json`] - JSON body extractor with `AppError` rejections

pub mod json;
pub mod logger;

pub use json::AppJson;
pub use logger::{init_logger, init_logger_with_file};

// Re-export error types from shared
pub use shared::{AppError, AppResult, ErrorCode};
