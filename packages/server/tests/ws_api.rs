//! WebSocket broadcast integration tests.
//!
//! End-to-end checks of the shared broadcast channel: prefixed relay to all
//! members, sender echo, membership after disconnect, interleaved senders.

mod fixtures;
use fixtures::TestServer;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect(server: &TestServer) -> WsStream {
    let (socket, _response) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    socket
}

/// Read frames until a text frame arrives, with a timeout.
async fn expect_text(socket: &mut WsStream) -> String {
    loop {
        let frame = timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("Timed out waiting for a broadcast frame")
            .expect("Stream ended while waiting for a broadcast frame")
            .expect("WebSocket error while waiting for a broadcast frame");
        match frame {
            Message::Text(text) => return text.to_string(),
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("Unexpected frame: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_broadcast_echoes_to_sender() {
    // テスト項目: 送信者自身にも prefix 付きのメッセージが返る
    // given (前提条件):
    let port = 19090;
    let server = TestServer::start(port).await;
    let mut alice = connect(&server).await;
    server.wait_for_connection_count(1).await;

    // when (操作):
    alice
        .send(Message::text("hello"))
        .await
        .expect("Failed to send");

    // then (期待する結果):
    assert_eq!(expect_text(&mut alice).await, "Client says: hello");
}

#[tokio::test]
async fn test_broadcast_reaches_all_connected_clients() {
    // テスト項目: 登録済みの全クライアントが同じメッセージを受信する
    // given (前提条件):
    let port = 19091;
    let server = TestServer::start(port).await;
    let mut alice = connect(&server).await;
    let mut bob = connect(&server).await;
    server.wait_for_connection_count(2).await;

    // when (操作): alice がメッセージを送信
    alice
        .send(Message::text("konnichiwa"))
        .await
        .expect("Failed to send");

    // then (期待する結果): 両方が受信する
    assert_eq!(expect_text(&mut alice).await, "Client says: konnichiwa");
    assert_eq!(expect_text(&mut bob).await, "Client says: konnichiwa");
}

#[tokio::test]
async fn test_interleaved_senders_all_messages_delivered() {
    // テスト項目: A の送信と B の送信が全員に届く（送信者間の順序は問わない）
    // given (前提条件):
    let port = 19092;
    let server = TestServer::start(port).await;
    let mut alice = connect(&server).await;
    let mut bob = connect(&server).await;
    server.wait_for_connection_count(2).await;

    // when (操作): A が "x"、B が "y" を送信
    alice.send(Message::text("x")).await.expect("Failed to send");
    bob.send(Message::text("y")).await.expect("Failed to send");

    // then (期待する結果): 両クライアントとも両方のメッセージを受信する
    let mut alice_received = vec![expect_text(&mut alice).await, expect_text(&mut alice).await];
    let mut bob_received = vec![expect_text(&mut bob).await, expect_text(&mut bob).await];
    alice_received.sort();
    bob_received.sort();
    let expected = vec![
        "Client says: x".to_string(),
        "Client says: y".to_string(),
    ];
    assert_eq!(alice_received, expected);
    assert_eq!(bob_received, expected);
}

#[tokio::test]
async fn test_disconnected_client_is_removed_from_broadcast() {
    // テスト項目: 切断したクライアントが registry から外れ、残りの配信は継続する
    // given (前提条件):
    let port = 19093;
    let server = TestServer::start(port).await;
    let mut alice = connect(&server).await;
    let mut bob = connect(&server).await;
    server.wait_for_connection_count(2).await;

    // when (操作): bob が切断してから alice が送信
    bob.send(Message::Close(None)).await.ok();
    drop(bob);
    server.wait_for_connection_count(1).await;

    alice
        .send(Message::text("after"))
        .await
        .expect("Failed to send");

    // then (期待する結果): alice のループはエラーなく動き続け、echo を受信する
    assert_eq!(expect_text(&mut alice).await, "Client says: after");
}

#[tokio::test]
async fn test_non_text_frames_are_ignored() {
    // テスト項目: バイナリフレームは中継されず、テキストのみが配信される
    // given (前提条件):
    let port = 19094;
    let server = TestServer::start(port).await;
    let mut alice = connect(&server).await;
    server.wait_for_connection_count(1).await;

    // when (操作): バイナリを送った後にテキストを送る
    alice
        .send(Message::Binary(vec![1, 2, 3].into()))
        .await
        .expect("Failed to send");
    alice
        .send(Message::text("text only"))
        .await
        .expect("Failed to send");

    // then (期待する結果): 受信するのはテキスト由来の 1 件のみ
    assert_eq!(expect_text(&mut alice).await, "Client says: text only");
}
