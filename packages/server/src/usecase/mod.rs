//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod broadcast_message;
pub mod register_connection;
pub mod unregister_connection;

pub use broadcast_message::{BROADCAST_PREFIX, BroadcastMessageUseCase, BroadcastOutcome};
pub use register_connection::RegisterConnectionUseCase;
pub use unregister_connection::UnregisterConnectionUseCase;
