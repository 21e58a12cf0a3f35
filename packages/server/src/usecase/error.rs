//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::InboundRejection;

/// システムイベントのブロードキャストエラー
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("Failed to serialize outbound message: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// メッセージ送信のエラー
#[derive(Debug, Error)]
pub enum SendMessageError {
    /// ペイロードが破棄された（送信者には通知しない）
    #[error("Inbound payload rejected: {0}")]
    Rejected(#[from] InboundRejection),

    #[error("Failed to serialize outbound message: {0}")]
    Serialization(#[from] serde_json::Error),
}
