//! Connection registry port.
//!
//! The registry is the shared set of currently active connections. It is the
//! only mutation surface over that set; broadcast fan-out always works on a
//! point-in-time snapshot, never on the live collection.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{entity::Connection, value_object::ConnectionId};

/// A broadcast recipient taken from a registry snapshot.
///
/// Pairs a connection's identity with the channel its writer task drains.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub id: ConnectionId,
    pub sender: UnboundedSender<String>,
}

/// Shared registry of active connections.
///
/// Invariant: a connection is in the registry if and only if it has
/// completed its handshake and has not yet been removed due to
/// disconnection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Insert a connection with its delivery channel.
    ///
    /// Adding an ID that is already present replaces the stale entry.
    async fn add(&self, connection: Connection, sender: UnboundedSender<String>);

    /// Remove a connection if present.
    ///
    /// Removing an absent connection is a no-op; returns whether an entry
    /// was actually removed.
    async fn remove(&self, id: &ConnectionId) -> bool;

    /// Point-in-time copy of the current members for broadcast fan-out.
    async fn snapshot(&self) -> Vec<Recipient>;

    /// Point-in-time copy of the current membership records.
    async fn connections(&self) -> Vec<Connection>;

    /// Number of currently registered connections.
    async fn count(&self) -> usize;
}
