//! Domain 層のエラー定義

use thiserror::Error;

/// 個々の接続への送信エラー
///
/// ブロードキャストでは受信者ごとに独立して扱われ、ループを中断しない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("Connection '{0}' is not registered")]
    ConnectionNotFound(String),

    #[error("Connection '{0}' is not open")]
    NotOpen(String),

    #[error("Outbound channel of connection '{0}' is closed")]
    ChannelClosed(String),
}

/// 受信ペイロードを破棄した理由
///
/// 送信者には返さず、ログにのみ残す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InboundRejection {
    #[error("Payload is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Payload is not a JSON object")]
    NotAnObject,

    #[error("Unsupported message type: {0}")]
    UnsupportedType(String),

    #[error("Payload has no string `text` field")]
    MissingText,
}
