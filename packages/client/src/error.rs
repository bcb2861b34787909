//! Client error definitions.

use thiserror::Error;

/// Errors surfaced by the chat client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// WebSocket connect or transport failure
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Terminal input failure
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
