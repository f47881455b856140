//! HTTP middleware

pub mod logging;
pub mod staff_role;

pub use logging::logging_middleware;
pub use staff_role::require_manager;
