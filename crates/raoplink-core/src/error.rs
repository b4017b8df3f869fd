//! Error types for Raoplink core.

use thiserror::Error;

/// Core error type for link planning.
#[derive(Debug, Error)]
pub enum Error {
    #[error("capture device has no linkable output ports")]
    EmptySourcePorts,

    #[error("sink has no linkable input ports")]
    EmptySinkPorts,
}

/// Result type alias for Raoplink core operations.
pub type Result<T> = std::result::Result<T, Error>;
