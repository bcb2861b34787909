//! InMemory Connection Registry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! HashMap をインメモリストアとして使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, Recipient, Timestamp};

/// One registry entry: the delivery channel plus bookkeeping.
struct Entry {
    sender: UnboundedSender<String>,
    connected_at: Timestamp,
}

/// インメモリ Connection Registry 実装
///
/// HashMap をインメモリストアとして使用する実装。
/// ドメイン層の ConnectionRegistry trait を実装します（依存性の逆転）。
pub struct InMemoryConnectionRegistry {
    /// 接続中のクライアント情報（delivery channel を含む）
    entries: Mutex<HashMap<ConnectionId, Entry>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, connection: Connection, sender: UnboundedSender<String>) {
        let mut entries = self.entries.lock().await;
        // insert replaces a stale entry when the id is already present
        entries.insert(
            connection.id,
            Entry {
                sender,
                connected_at: connection.connected_at,
            },
        );
    }

    async fn remove(&self, id: &ConnectionId) -> bool {
        let mut entries = self.entries.lock().await;
        entries.remove(id).is_some()
    }

    async fn snapshot(&self) -> Vec<Recipient> {
        let entries = self.entries.lock().await;
        entries
            .iter()
            .map(|(id, entry)| Recipient {
                id: id.clone(),
                sender: entry.sender.clone(),
            })
            .collect()
    }

    async fn connections(&self) -> Vec<Connection> {
        let entries = self.entries.lock().await;
        entries
            .iter()
            .map(|(id, entry)| Connection::new(id.clone(), entry.connected_at))
            .collect()
    }

    async fn count(&self) -> usize {
        let entries = self.entries.lock().await;
        entries.len()
    }
}
