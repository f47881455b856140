//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// The command could not be spawned or its pipes failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The command did not finish in time
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The command exited with a non-zero status
    #[error("{program} failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Command output could not be understood
    #[error("Unexpected printer list output: {0}")]
    Parse(String),

    /// Empty or unusable printer name
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
