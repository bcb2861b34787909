//! Hiroba broadcast server library.
//!
//! One shared broadcast channel over WebSocket: every text message a client
//! sends is relayed to all currently connected clients.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use error::ServerError;

/// Run the broadcast server until shutdown.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    ui::run(config).await
}
