//! UseCase: 接続登録処理

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{Connection, ConnectionRegistry};

/// 接続登録のユースケース
///
/// Adds a connection to the registry once its handshake has completed.
pub struct RegisterConnectionUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl RegisterConnectionUseCase {
    /// 新しい RegisterConnectionUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Register the connection and its delivery channel.
    ///
    /// Registration cannot fail: a duplicate ID replaces the stale entry.
    pub async fn execute(&self, connection: Connection, sender: UnboundedSender<String>) {
        self.registry.add(connection, sender).await;
    }
}
