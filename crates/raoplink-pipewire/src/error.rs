//! PipeWire boundary error types.

use thiserror::Error;

/// Error type for the PipeWire boundary.
#[derive(Debug, Error)]
pub enum PwError {
    #[error("required tool not found in PATH: {0}")]
    ToolMissing(String),

    #[error("PipeWire connection failed: {0}")]
    ConnectionFailed(String),

    #[error("command failed: {0}")]
    CommandFailed(String),

    #[error("command timed out: {0}")]
    CommandTimeout(String),

    #[error("link creation failed: {0}")]
    LinkCreationFailed(String),
}

/// Result type for PipeWire boundary operations.
pub type PwResult<T> = Result<T, PwError>;
