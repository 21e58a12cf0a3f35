//! Wire DTOs as seen by the client.

use serde::{Deserialize, Serialize};

/// Client → relay frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Message {
        text: String,
        /// Omitted when the user has no name so the relay picks the placeholder
        #[serde(skip_serializing_if = "Option::is_none")]
        sender: Option<String>,
    },
}

/// Relay → client frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Message {
        id: String,
        text: String,
        sender: String,
        timestamp: i64,
    },
    System {
        text: String,
        timestamp: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_without_sender_omits_field() {
        // テスト項目: 名前が無い場合 sender フィールドは送られない
        // given (前提条件):
        let msg = ClientMessage::Message {
            text: "hi".to_string(),
            sender: None,
        };

        // when (操作):
        let json = serde_json::to_string(&msg).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"message","text":"hi"}"#);
    }

    #[test]
    fn test_client_message_with_sender() {
        // テスト項目: 名前がある場合 sender フィールドが付く
        // given (前提条件):
        let msg = ClientMessage::Message {
            text: "hi".to_string(),
            sender: Some("alice".to_string()),
        };

        // when (操作):
        let json = serde_json::to_string(&msg).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"message","text":"hi","sender":"alice"}"#);
    }

    #[test]
    fn test_server_message_parses_both_shapes() {
        // テスト項目: message と system の両方の形式をパースできる
        // given (前提条件):
        let chat = r#"{"type":"message","id":"1","text":"hi","sender":"bob","timestamp":5}"#;
        let system = r#"{"type":"system","text":"A user left the chat","timestamp":6}"#;

        // when (操作):
        let chat = serde_json::from_str::<ServerMessage>(chat).unwrap();
        let system = serde_json::from_str::<ServerMessage>(system).unwrap();

        // then (期待する結果):
        assert_eq!(
            chat,
            ServerMessage::Message {
                id: "1".to_string(),
                text: "hi".to_string(),
                sender: "bob".to_string(),
                timestamp: 5,
            }
        );
        assert_eq!(
            system,
            ServerMessage::System {
                text: "A user left the chat".to_string(),
                timestamp: 6,
            }
        );
    }
}
