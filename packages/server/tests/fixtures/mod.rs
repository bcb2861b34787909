//! Shared test fixtures.

use std::time::Duration;

use hiroba_server::{ServerConfig, run_server};

/// A server instance running in the background for integration tests.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Boot the server on the given port and wait until it answers health
    /// checks.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            exclude_sender: false,
        };

        tokio::spawn(async move {
            if let Err(e) = run_server(config).await {
                panic!("Test server failed: {e}");
            }
        });

        let server = Self { port };
        server.wait_until_ready().await;
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }

    /// Current registry membership as reported by the debug endpoint.
    pub async fn connection_count(&self) -> usize {
        let client = reqwest::Client::new();
        let body: serde_json::Value = client
            .get(format!("{}/api/connections", self.base_url()))
            .send()
            .await
            .expect("Failed to query connections")
            .json()
            .await
            .expect("Failed to parse connections JSON");
        body.as_array().map(|list| list.len()).unwrap_or(0)
    }

    /// Poll the debug endpoint until the registry reaches the expected size.
    ///
    /// Registration happens in the upgrade callback, slightly after the
    /// client side sees the handshake complete, so tests synchronize here.
    pub async fn wait_for_connection_count(&self, expected: usize) {
        for _ in 0..50 {
            if self.connection_count().await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!(
            "Registry did not reach {} connection(s) on port {}",
            expected, self.port
        );
    }

    async fn wait_until_ready(&self) {
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if let Ok(response) = client
                .get(format!("{}/api/health", self.base_url()))
                .send()
                .await
            {
                if response.status() == 200 {
                    return;
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("Test server did not become ready on port {}", self.port);
    }
}
