//! Entity 定義
//!
//! リレーが送出するチャットメッセージとシステムイベント。

use super::value_object::{MessageId, MessageText, SenderName, Timestamp};

/// 正規化済みのチャットメッセージ
///
/// `id` と `timestamp` はリレーが割り当てる。クライアントから届いた値は使わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: MessageText,
    pub sender: SenderName,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn new(id: MessageId, text: MessageText, sender: SenderName, timestamp: Timestamp) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp,
        }
    }
}

/// システムイベントの種類（入室・退室）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventKind {
    Joined,
    Left,
}

impl SystemEventKind {
    /// クライアントに表示される固定文言
    pub fn text(&self) -> &'static str {
        match self {
            SystemEventKind::Joined => "A user joined the chat",
            SystemEventKind::Left => "A user left the chat",
        }
    }
}

/// リレーが生成する通知（`id` と `sender` を持たない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemEvent {
    pub kind: SystemEventKind,
    pub timestamp: Timestamp,
}

impl SystemEvent {
    pub fn new(kind: SystemEventKind, timestamp: Timestamp) -> Self {
        Self { kind, timestamp }
    }

    pub fn text(&self) -> &'static str {
        self.kind.text()
    }
}
