//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - Registry からの削除と、残りの参加者への退室通知
//!
//! ### なぜこのテストが必要か
//! - 正常な切断と異常な切断を区別せず、退室通知がちょうど 1 回送られることを保証する
//! - 削除後の接続がブロードキャスト対象から外れることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と通知
//! - エッジケース：最後の参加者の切断（通知対象なし）
//! - エッジケース：同じ接続の二重切断（2 回目は何もしない）

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, SystemEventKind};

use super::{
    broadcast::{BroadcastEngine, BroadcastReport},
    error::BroadcastError,
};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Registry（接続集合の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// BroadcastEngine（システムイベントの送信）
    engine: Arc<BroadcastEngine>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, engine: Arc<BroadcastEngine>) -> Self {
        Self { registry, engine }
    }

    /// 切断処理の開始を記録
    ///
    /// トランスポートが close / エラーを通知した時点で呼ぶ。
    /// 以後、この接続はファンアウトの対象にならない。
    pub async fn begin(&self, id: &ConnectionId) {
        self.registry.mark_closing(id).await;
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(BroadcastReport))` - 削除して退室通知を送った
    /// * `Ok(None)` - 既に削除済みだった（通知しない）
    /// * `Err(BroadcastError)` - 退室通知のシリアライズ失敗（削除は完了済み）
    pub async fn execute(
        &self,
        id: &ConnectionId,
    ) -> Result<Option<BroadcastReport>, BroadcastError> {
        if !self.registry.remove(id).await {
            return Ok(None);
        }

        self.engine
            .broadcast_system_event(SystemEventKind::Left)
            .await
            .map(Some)
    }
}
