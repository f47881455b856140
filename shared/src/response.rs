//! Response types shared by several routes

use serde::{Deserialize, Serialize};

/// `{ "success": true }` acknowledgement returned by delete/bulk endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
    /// Optional human-readable message (print jobs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    /// Plain acknowledgement
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Acknowledgement with a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}
