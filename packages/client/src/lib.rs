//! Hiroba CLI chat client library.
//!
//! Connects to the broadcast endpoint, forwards typed lines as text frames,
//! and prints every relayed broadcast with a local timestamp.

pub mod config;
pub mod error;

use chrono::{DateTime, Local};
use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

pub use config::ClientConfig;
pub use error::ClientError;

/// WebSocket stream type used by the client.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Establish the WebSocket connection to the broadcast endpoint.
pub async fn connect(url: &str) -> Result<WsStream, ClientError> {
    let (stream, _response) = connect_async(url).await?;
    Ok(stream)
}

/// Render one incoming broadcast line with a local timestamp.
fn render_incoming(now: DateTime<Local>, text: &str) -> String {
    format!("[{}] {}", now.format("%H:%M:%S"), text)
}

/// Run the interactive client until EOF, Ctrl+C, or server close.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let stream = connect(&config.url).await?;
    tracing::info!("Connected to {}", config.url);
    println!("Connected to {}. Type a message and press Enter.", config.url);

    let (mut write, mut read) = stream.split();

    // Print incoming broadcasts to the terminal
    let mut print_task = tokio::spawn(async move {
        while let Some(frame) = read.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    println!("{}", render_incoming(Local::now(), text.as_str()));
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    // rustyline is blocking; feed typed lines through a channel
    let editor = DefaultEditor::new()?;
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || read_lines(editor, line_tx));

    // Forward typed lines to the server
    let mut send_task = tokio::spawn(async move {
        while let Some(line) = line_rx.recv().await {
            if write.send(Message::text(line)).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut print_task => send_task.abort(),
        _ = &mut send_task => print_task.abort(),
    };

    Ok(())
}

fn read_lines(mut editor: DefaultEditor, line_tx: mpsc::UnboundedSender<String>) {
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        }
    }
}
