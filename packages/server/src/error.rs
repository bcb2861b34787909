//! Server error definitions.

use thiserror::Error;

/// Errors surfaced by the server runner.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve on the configured address
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
