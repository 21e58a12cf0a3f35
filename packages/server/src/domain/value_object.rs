//! Value Object 定義
//!
//! 接続 ID、メッセージ ID、本文、送信者名、タイムスタンプを表す値オブジェクト。
//! 本文と送信者名は生成時に上限文字数へ切り詰められるため、
//! 送出されるメッセージが上限を超えることはありません。

use std::fmt;

use uuid::Uuid;

/// メッセージ本文の上限文字数
pub const MAX_TEXT_CHARS: usize = 1000;

/// 送信者名の上限文字数
pub const MAX_SENDER_CHARS: usize = 32;

/// 送信者名が無い場合に使うプレースホルダー
pub const ANONYMOUS_SENDER: &str = "anonymous";

/// 先頭から `max_chars` 文字（Unicode スカラー値）までを残して切り詰める
fn truncate_chars(value: String, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            let mut value = value;
            value.truncate(byte_index);
            value
        }
        None => value,
    }
}

/// 接続 ID（接続の受け付け時に割り当てられる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい接続 ID を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// メッセージ ID（受信者側での一意性・順序付け用。リレーは重複排除しない）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// MessageId の生成を担う Factory
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// UUID v4 ベースの MessageId を生成
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

/// メッセージ本文（最大 1000 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// 本文を作成（上限を超える部分は切り捨て）
    pub fn new(value: String) -> Self {
        Self(truncate_chars(value, MAX_TEXT_CHARS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 送信者名（最大 32 文字、空なら "anonymous"）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    /// 送信者名を作成
    ///
    /// `None` や空文字列はプレースホルダーに置き換えられる。
    pub fn new(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self(truncate_chars(value, MAX_SENDER_CHARS)),
            _ => Self::anonymous(),
        }
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_SENDER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// タイムスタンプ（Unix エポックからのミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
