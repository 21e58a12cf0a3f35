//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatMessage, MessageId, MessageText, SenderName, SystemEvent, Timestamp};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl dto::InboundMessage {
    /// Normalize into a `ChatMessage` with relay-assigned `id` and `timestamp`.
    pub fn into_chat_message(self, id: MessageId, timestamp: Timestamp) -> ChatMessage {
        ChatMessage::new(
            id,
            MessageText::new(self.text),
            SenderName::new(self.sender),
            timestamp,
        )
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<ChatMessage> for dto::OutboundMessage {
    fn from(model: ChatMessage) -> Self {
        Self::Message {
            id: model.id.into_string(),
            text: model.text.into_string(),
            sender: model.sender.into_string(),
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<SystemEvent> for dto::OutboundMessage {
    fn from(event: SystemEvent) -> Self {
        Self::System {
            text: event.text().to_string(),
            timestamp: event.timestamp.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ANONYMOUS_SENDER, MAX_SENDER_CHARS, MAX_TEXT_CHARS, MessageIdFactory, SystemEventKind,
    };

    #[test]
    fn test_inbound_message_to_domain_truncates_fields() {
        // テスト項目: 変換時に本文と送信者名が上限に切り詰められる
        // given (前提条件):
        let inbound = dto::InboundMessage {
            text: "t".repeat(MAX_TEXT_CHARS + 10),
            sender: Some("s".repeat(MAX_SENDER_CHARS + 10)),
        };

        // when (操作):
        let message = inbound.into_chat_message(MessageIdFactory::generate(), Timestamp::new(5));

        // then (期待する結果):
        assert_eq!(message.text.as_str().chars().count(), MAX_TEXT_CHARS);
        assert_eq!(message.sender.as_str().chars().count(), MAX_SENDER_CHARS);
        assert_eq!(message.timestamp, Timestamp::new(5));
    }

    #[test]
    fn test_inbound_message_without_sender_is_anonymous() {
        // テスト項目: sender が無い場合は "anonymous" になる
        // given (前提条件):
        let inbound = dto::InboundMessage {
            text: "hi".to_string(),
            sender: None,
        };

        // when (操作):
        let message = inbound.into_chat_message(MessageIdFactory::generate(), Timestamp::new(1));

        // then (期待する結果):
        assert_eq!(message.sender.as_str(), ANONYMOUS_SENDER);
    }

    #[test]
    fn test_domain_chat_message_to_dto() {
        // テスト項目: ドメインのチャットメッセージが DTO に変換される
        // given (前提条件):
        let id = MessageIdFactory::generate();
        let message = ChatMessage::new(
            id.clone(),
            MessageText::new("Hello!".to_string()),
            SenderName::new(Some("alice".to_string())),
            Timestamp::new(1000),
        );

        // when (操作):
        let dto_msg: dto::OutboundMessage = message.into();

        // then (期待する結果):
        assert_eq!(
            dto_msg,
            dto::OutboundMessage::Message {
                id: id.into_string(),
                text: "Hello!".to_string(),
                sender: "alice".to_string(),
                timestamp: 1000,
            }
        );
    }

    #[test]
    fn test_domain_system_event_to_dto() {
        // テスト項目: システムイベントが DTO に変換される
        // given (前提条件):
        let event = SystemEvent::new(SystemEventKind::Left, Timestamp::new(3000));

        // when (操作):
        let dto_msg: dto::OutboundMessage = event.into();

        // then (期待する結果):
        assert_eq!(
            dto_msg,
            dto::OutboundMessage::System {
                text: "A user left the chat".to_string(),
                timestamp: 3000,
            }
        );
    }
}
