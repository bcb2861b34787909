//! HTTP API response DTOs for the broadcast endpoint.

use serde::{Deserialize, Serialize};

/// One active connection as reported by the debug listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDto {
    pub connection_id: String,
    /// RFC 3339 timestamp (UTC) of handshake completion
    pub connected_at: String,
}
