//! Broadcast Engine
//!
//! ## 責務
//!
//! - 受信ペイロードの検証・正規化（`handle_inbound`）
//! - システムイベントの生成（`broadcast_system_event`）
//! - Registry を使ったファンアウト（`fan_out`）
//!
//! ## 設計ノート
//!
//! 送信ごとの結果は `Result` として受け取り、ここで明示的に破棄します。
//! 1 件の送信失敗がブロードキャスト全体を止めることはありません。
//! シリアライズは 1 メッセージにつき 1 回だけ行い、全受信者に同じ文字列を送ります。

use std::sync::Arc;

use crate::{
    domain::{
        ChatMessage, Clock, Connection, ConnectionId, ConnectionRegistry, MessageIdFactory,
        SystemEvent, SystemEventKind,
    },
    infrastructure::dto::websocket::{InboundMessage, OutboundMessage},
};

use super::error::{BroadcastError, SendMessageError};

/// ファンアウトの集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// 送信キューに積めた受信者数
    pub delivered: usize,
    /// 送信に失敗した受信者数（破棄済み）
    pub failed: usize,
}

/// リレーされたメッセージと配送結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedMessage {
    pub message: ChatMessage,
    /// 送信者へのエコーが成功したか
    pub echoed: bool,
    /// 送信者以外へのファンアウト結果
    pub fan_out: BroadcastReport,
}

/// Broadcast Engine
pub struct BroadcastEngine {
    /// Registry（接続集合の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// Clock（サーバー時刻の抽象化）
    clock: Arc<dyn Clock>,
}

impl BroadcastEngine {
    /// 新しい BroadcastEngine を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// システムイベントを全ての Open な接続に送信
    ///
    /// 除外指定はしない。入室通知は登録前に呼ばれるため、入室者本人には届かない。
    pub async fn broadcast_system_event(
        &self,
        kind: SystemEventKind,
    ) -> Result<BroadcastReport, BroadcastError> {
        let event = SystemEvent::new(kind, self.clock.now());
        let json = OutboundMessage::from(event).to_json()?;
        let report = self.fan_out(&json, None).await;

        tracing::debug!(
            "Broadcasted system event {:?} (delivered: {}, failed: {})",
            kind,
            report.delivered,
            report.failed
        );

        Ok(report)
    }

    /// 受信ペイロードを処理
    ///
    /// 1. JSON としてパース・検証（不正なら破棄）
    /// 2. `id` と `timestamp` を付与して正規化
    /// 3. 1 回だけシリアライズし、送信者へエコー
    /// 4. 送信者以外にファンアウト
    pub async fn handle_inbound(
        &self,
        origin: &ConnectionId,
        raw: &str,
    ) -> Result<RelayedMessage, SendMessageError> {
        let inbound = InboundMessage::parse(raw)?;

        let message = inbound.into_chat_message(MessageIdFactory::generate(), self.clock.now());
        let json = OutboundMessage::from(message.clone()).to_json()?;

        let echoed = match self.registry.push_to(origin, &json).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Echo to '{}' dropped: {}", origin, e);
                false
            }
        };

        let fan_out = self.fan_out(&json, Some(origin)).await;

        tracing::debug!(
            "Relayed message '{}' from '{}' (echoed: {}, delivered: {}, failed: {})",
            message.id.as_str(),
            origin,
            echoed,
            fan_out.delivered,
            fan_out.failed
        );

        Ok(RelayedMessage {
            message,
            echoed,
            fan_out,
        })
    }

    /// シリアライズ済みのペイロードを Open な接続に送信
    ///
    /// 送信失敗は集計だけして握りつぶす。
    pub async fn fan_out(&self, payload: &str, except: Option<&ConnectionId>) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        let mut visit = |connection: &Connection| match connection.send(payload) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                tracing::warn!("Failed to push message: {}", e);
                report.failed += 1;
            }
        };
        self.registry.for_each_open(except, &mut visit).await;

        report
    }
}
