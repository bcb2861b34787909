//! Core domain models for the broadcast endpoint.

use serde::{Deserialize, Serialize};

use super::value_object::{ConnectionId, Timestamp};

/// Represents one accepted client session as seen by the registry.
///
/// The registry tracks membership only; the underlying socket is owned by
/// the per-connection handler task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection identifier
    pub id: ConnectionId,
    /// Timestamp when the connection completed its handshake
    pub connected_at: Timestamp,
}

impl Connection {
    /// Create a new connection record
    pub fn new(id: ConnectionId, connected_at: Timestamp) -> Self {
        Self { id, connected_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::ConnectionIdFactory;

    #[test]
    fn test_connection_new() {
        // テスト項目: Connection が ID と接続時刻を保持する
        // given (前提条件):
        let id = ConnectionIdFactory::generate().unwrap();
        let connected_at = Timestamp::new(1000);

        // when (操作):
        let connection = Connection::new(id.clone(), connected_at);

        // then (期待する結果):
        assert_eq!(connection.id, id);
        assert_eq!(connection.connected_at, connected_at);
    }
}
