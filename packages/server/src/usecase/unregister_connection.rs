//! UseCase: 接続解除処理

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// 接続解除のユースケース
///
/// Removes a connection from the registry when its loop ends, whether by
/// clean close or by transport failure.
pub struct UnregisterConnectionUseCase {
    /// Registry（データアクセス層の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl UnregisterConnectionUseCase {
    /// 新しい UnregisterConnectionUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Remove the connection from the registry.
    ///
    /// Returns whether an entry was actually removed. Removing an absent
    /// connection (double disconnect, or an entry already pruned after a
    /// send failure) is a no-op.
    pub async fn execute(&self, id: &ConnectionId) -> bool {
        self.registry.remove(id).await
    }
}
