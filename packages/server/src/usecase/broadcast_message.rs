//! UseCase: メッセージのブロードキャスト処理

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// Fixed prefix prepended to every relayed message.
pub const BROADCAST_PREFIX: &str = "Client says: ";

/// Result of one broadcast fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Number of connections the message was delivered to
    pub delivered: usize,
    /// Connections whose delivery channel was gone; removed fail-safe
    pub pruned: Vec<ConnectionId>,
}

/// メッセージブロードキャストのユースケース
///
/// Relays one received text to every connection in the registry's current
/// snapshot. Delivery is best-effort: a failed send never aborts delivery
/// to the remaining recipients.
pub struct BroadcastMessageUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// Whether the sender receives its own broadcast back
    echo_to_sender: bool,
}

impl BroadcastMessageUseCase {
    /// 新しい BroadcastMessageUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, echo_to_sender: bool) -> Self {
        Self {
            registry,
            echo_to_sender,
        }
    }

    /// Fan the received text out to the registry snapshot.
    ///
    /// The outgoing frame is the fixed prefix followed by the verbatim
    /// received text. Recipients whose channel is closed are removed from
    /// the registry; their own loops treat the removal as a no-op when
    /// they unregister later.
    pub async fn execute(&self, from: &ConnectionId, text: &str) -> BroadcastOutcome {
        let outgoing = format!("{BROADCAST_PREFIX}{text}");

        let recipients = self.registry.snapshot().await;

        let mut delivered = 0;
        let mut pruned = Vec::new();
        for recipient in recipients {
            if !self.echo_to_sender && recipient.id == *from {
                continue;
            }
            if recipient.sender.send(outgoing.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(
                    "Failed to deliver to connection '{}', removing it from the registry",
                    recipient.id
                );
                self.registry.remove(&recipient.id).await;
                pruned.push(recipient.id);
            }
        }

        BroadcastOutcome { delivered, pruned }
    }
}
