//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the filter falls back to
/// `default_level` for the given binary and the workspace crates.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let fallback = format!(
        "{bin}={level},hiroba_server={level},hiroba_client={level},hiroba_shared={level},tower_http={level}",
        bin = bin_name.replace('-', "_"),
        level = default_level,
    );

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .init();

    tracing::debug!("Logger initialized for '{}'", bin_name);
}
