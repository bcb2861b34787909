//! Server configuration.

use clap::Parser;

/// CLI configuration for the broadcast server.
#[derive(Debug, Clone, Parser)]
#[command(name = "hiroba-server", about = "Shared-channel broadcast WebSocket server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Do not echo a broadcast back to its sender
    #[arg(long, default_value_t = false)]
    pub exclude_sender: bool,
}

impl ServerConfig {
    /// Socket address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
