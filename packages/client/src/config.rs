//! Client configuration.

use clap::Parser;

/// CLI configuration for the chat client.
#[derive(Debug, Clone, Parser)]
#[command(name = "hiroba-client", about = "CLI client for the Hiroba broadcast server")]
pub struct ClientConfig {
    /// WebSocket endpoint to connect to
    #[arg(long, default_value = "ws://127.0.0.1:3000/ws")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_url() {
        // テスト項目: 引数なしの場合のデフォルト URL
        // when (操作):
        let config = ClientConfig::try_parse_from(["hiroba-client"]).unwrap();

        // then (期待する結果):
        assert_eq!(config.url, "ws://127.0.0.1:3000/ws");
    }

    #[test]
    fn test_config_custom_url() {
        // テスト項目: --url で接続先を指定できる
        // when (操作):
        let config =
            ClientConfig::try_parse_from(["hiroba-client", "--url", "ws://example.com/ws"])
                .unwrap();

        // then (期待する結果):
        assert_eq!(config.url, "ws://example.com/ws");
    }
}
