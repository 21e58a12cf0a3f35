//! ConnectionRegistry trait 定義
//!
//! 接続中のコネクション集合へのインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{connection::Connection, error::PushError, value_object::ConnectionId};

/// Connection Registry trait
///
/// 登録・削除・走査は実装側で相互排他になっている必要がある。
/// 呼び出し側にロックは公開しない。
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続を登録（受け付けごとに ID が一意なので重複チェックはしない）
    async fn add(&self, connection: Connection);

    /// 接続を削除
    ///
    /// 削除した場合は `true`、登録されていなければ何もせず `false`。
    async fn remove(&self, id: &ConnectionId) -> bool;

    /// 切断処理の開始を記録（以後のブロードキャスト対象から外れる）
    async fn mark_closing(&self, id: &ConnectionId);

    /// Open な接続ごとに `visit` を呼ぶ（`except` は除外）
    async fn for_each_open(
        &self,
        except: Option<&ConnectionId>,
        visit: &mut (dyn for<'c> FnMut(&'c Connection) + Send),
    );

    /// 特定の接続に送信
    async fn push_to(&self, id: &ConnectionId, payload: &str) -> Result<(), PushError>;

    /// 登録中の接続数
    async fn count(&self) -> usize;
}
