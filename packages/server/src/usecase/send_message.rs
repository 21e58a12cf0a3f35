//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者へのエコーと、送信者以外へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 1 つの接続から届いたメッセージが受信順に処理されることを確認
//! - 削除済みの接続がブロードキャスト対象に含まれないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：連続したメッセージ送信
//! - エッジケース：送信者のみが接続している場合（ブロードキャスト対象なし）

use std::sync::Arc;

use crate::domain::ConnectionId;

use super::{
    broadcast::{BroadcastEngine, RelayedMessage},
    error::SendMessageError,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// BroadcastEngine（検証・正規化・ファンアウト）
    engine: Arc<BroadcastEngine>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(engine: Arc<BroadcastEngine>) -> Self {
        Self { engine }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `origin` - 送信元の接続 ID
    /// * `raw` - 受信したテキストフレーム
    ///
    /// # Returns
    ///
    /// * `Ok(RelayedMessage)` - 正規化したメッセージと配送結果
    /// * `Err(SendMessageError)` - 破棄された（送信者には通知しない）
    pub async fn execute(
        &self,
        origin: &ConnectionId,
        raw: &str,
    ) -> Result<RelayedMessage, SendMessageError> {
        self.engine.handle_inbound(origin, raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Connection, ConnectionRegistry, SystemClock},
        infrastructure::registry::InMemoryConnectionRegistry,
    };
    use tokio::sync::mpsc;

    fn create_usecase() -> (SendMessageUseCase, Arc<InMemoryConnectionRegistry>) {
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let engine = Arc::new(BroadcastEngine::new(
            registry.clone(),
            Arc::new(SystemClock),
        ));
        (SendMessageUseCase::new(engine), registry)
    }

    async fn register(
        registry: &InMemoryConnectionRegistry,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = ConnectionId::generate();
        registry.add(Connection::new(id, tx)).await;
        (id, rx)
    }

    fn text_of(raw: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        value["text"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_send_message_only_sender_connected() {
        // テスト項目: 送信者のみが接続している場合、エコーだけが届く
        // given (前提条件):
        let (usecase, registry) = create_usecase();
        let (alice, mut rx_alice) = register(&registry).await;

        // when (操作):
        let result = usecase
            .execute(&alice, r#"{"type":"message","text":"solo"}"#)
            .await
            .unwrap();

        // then (期待する結果):
        assert!(result.echoed);
        assert_eq!(result.fan_out.delivered, 0);
        assert_eq!(text_of(&rx_alice.try_recv().unwrap()), "solo");
    }

    #[tokio::test]
    async fn test_messages_from_one_connection_keep_order() {
        // テスト項目: 1 つの接続からのメッセージは受信順に届く
        // given (前提条件):
        let (usecase, registry) = create_usecase();
        let (alice, _rx_alice) = register(&registry).await;
        let (_bob, mut rx_bob) = register(&registry).await;

        // when (操作):
        for text in ["first", "second", "third"] {
            let raw = serde_json::json!({"type": "message", "text": text}).to_string();
            usecase.execute(&alice, &raw).await.unwrap();
        }

        // then (期待する結果):
        let received: Vec<String> = std::iter::from_fn(|| rx_bob.try_recv().ok())
            .map(|raw| text_of(&raw))
            .collect();
        assert_eq!(received, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_removed_connection_is_not_addressed() {
        // テスト項目: 削除された接続にはメッセージが届かない
        // given (前提条件):
        let (usecase, registry) = create_usecase();
        let (alice, _rx_alice) = register(&registry).await;
        let (bob, mut rx_bob) = register(&registry).await;
        registry.remove(&bob).await;

        // when (操作):
        let result = usecase
            .execute(&alice, r#"{"type":"message","text":"hi"}"#)
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.fan_out.delivered, 0);
        assert!(rx_bob.try_recv().is_err());
    }
}
