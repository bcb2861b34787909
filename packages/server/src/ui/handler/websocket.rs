//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use hiroba_shared::time::unix_timestamp_millis;

use crate::{
    domain::{Connection, ConnectionIdFactory, Timestamp},
    ui::state::AppState,
    usecase::{BroadcastMessageUseCase, RegisterConnectionUseCase, UnregisterConnectionUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let connection_id = match ConnectionIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to generate connection id: {}", e);
            return;
        }
    };

    // Create a channel for this client to receive broadcasts
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Handshake is complete once the upgrade callback runs; register now
    let connection = Connection::new(
        connection_id.clone(),
        Timestamp::new(unix_timestamp_millis()),
    );
    let register_usecase = RegisterConnectionUseCase::new(state.registry.clone());
    register_usecase.execute(connection, tx).await;
    tracing::info!("Connection '{}' registered", connection_id);

    let recv_state = state.clone();
    let recv_id = connection_id.clone();

    // Spawn a task to receive messages from this client and fan them out
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", recv_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let broadcast_usecase = BroadcastMessageUseCase::new(
                        recv_state.registry.clone(),
                        recv_state.echo_to_sender,
                    );
                    let outcome = broadcast_usecase.execute(&recv_id, text.as_str()).await;
                    tracing::debug!(
                        "Broadcast from '{}' delivered to {} connection(s)",
                        recv_id,
                        outcome.delivered
                    );
                    if !outcome.pruned.is_empty() {
                        tracing::warn!(
                            "Pruned {} dead connection(s) during broadcast from '{}'",
                            outcome.pruned.len(),
                            recv_id
                        );
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to drain this connection's queue into the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Any exit path counts as a disconnect; removal of an already-pruned
    // entry is a no-op
    let unregister_usecase = UnregisterConnectionUseCase::new(state.registry.clone());
    if unregister_usecase.execute(&connection_id).await {
        tracing::info!(
            "Connection '{}' disconnected and removed from registry",
            connection_id
        );
    } else {
        tracing::debug!("Connection '{}' was already removed", connection_id);
    }
}
