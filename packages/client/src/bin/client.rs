//! CLI chat client for the Hiroba broadcast server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --url ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use hiroba_client::{ClientConfig, run_client};
use hiroba_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ClientConfig::parse();

    // Run the client
    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
