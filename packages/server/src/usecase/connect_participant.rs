//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 入室通知のブロードキャストと、その後の Registry への登録
//!
//! ### なぜこのテストが必要か
//! - 入室通知は登録前に送るため、入室者本人には届かないことを保証する
//! - 既存の参加者にはちょうど 1 回だけ届くことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存の参加者がいる状態での接続
//! - エッジケース：最初の参加者の接続（通知対象なし）

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry, SystemEventKind};

use super::{
    broadcast::{BroadcastEngine, BroadcastReport},
    error::BroadcastError,
};

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Registry（接続集合の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// BroadcastEngine（システムイベントの送信）
    engine: Arc<BroadcastEngine>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, engine: Arc<BroadcastEngine>) -> Self {
        Self { registry, engine }
    }

    /// 参加者接続を実行
    ///
    /// 既存の参加者に入室通知を送ってから接続を登録する。
    /// 通知に失敗しても登録は行う。
    ///
    /// # Returns
    ///
    /// * `Ok(BroadcastReport)` - 入室通知の配送結果
    /// * `Err(BroadcastError)` - 入室通知のシリアライズ失敗（登録は完了済み）
    pub async fn execute(&self, connection: Connection) -> Result<BroadcastReport, BroadcastError> {
        let joined = self
            .engine
            .broadcast_system_event(SystemEventKind::Joined)
            .await;

        self.registry.add(connection).await;

        joined
    }

    /// 接続中の参加者数を取得
    pub async fn count_participants(&self) -> usize {
        self.registry.count().await
    }
}
