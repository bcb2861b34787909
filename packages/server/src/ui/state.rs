//! Server state and connection management.

use std::sync::Arc;

use crate::domain::ConnectionRegistry;

/// Shared application state
pub struct AppState {
    /// Registry port（データアクセス層の抽象化）
    pub registry: Arc<dyn ConnectionRegistry>,
    /// Whether a sender receives its own broadcast back
    pub echo_to_sender: bool,
}
