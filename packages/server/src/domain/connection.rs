//! 接続モデル
//!
//! 1 本の WebSocket 接続を表すハンドル。送信は接続ごとの書き込みタスクが
//! 読み出す `UnboundedSender` 経由で行うため、遅い受信者がブロードキャスト
//! 全体を止めることはありません。

use tokio::sync::mpsc;

use super::{error::PushError, value_object::ConnectionId};

/// クライアントへのメッセージ送信用チャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// 接続のライフサイクル状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closing,
    Closed,
}

/// 登録中の接続
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    channel: PusherChannel,
    closing: bool,
}

impl Connection {
    pub fn new(id: ConnectionId, channel: PusherChannel) -> Self {
        Self {
            id,
            channel,
            closing: false,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// 現在の状態
    ///
    /// 書き込みタスクが終了してチャンネルが閉じていれば `Closed`、
    /// 切断処理が始まっていれば `Closing`。
    pub fn state(&self) -> ConnectionState {
        if self.channel.is_closed() {
            ConnectionState::Closed
        } else if self.closing {
            ConnectionState::Closing
        } else {
            ConnectionState::Open
        }
    }

    /// 送信可能な状態か
    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// 切断処理の開始を記録
    pub fn mark_closing(&mut self) {
        self.closing = true;
    }

    /// メッセージを送信キューに積む
    pub fn send(&self, payload: &str) -> Result<(), PushError> {
        match self.state() {
            ConnectionState::Open => self
                .channel
                .send(payload.to_string())
                .map_err(|_| PushError::ChannelClosed(self.id.to_string())),
            ConnectionState::Closing => Err(PushError::NotOpen(self.id.to_string())),
            ConnectionState::Closed => Err(PushError::ChannelClosed(self.id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_connection_is_open() {
        // テスト項目: 受信側が生きている接続は Open
        // given (前提条件):
        let (tx, _rx) = mpsc::unbounded_channel();

        // when (操作):
        let connection = Connection::new(ConnectionId::generate(), tx);

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Open);
        assert!(connection.is_open());
    }

    #[test]
    fn test_connection_with_dropped_receiver_is_closed() {
        // テスト項目: 書き込みタスクが終了した接続は Closed
        // given (前提条件):
        let (tx, rx) = mpsc::unbounded_channel();
        let connection = Connection::new(ConnectionId::generate(), tx);

        // when (操作):
        drop(rx);

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Closed);
        assert!(matches!(
            connection.send("hello"),
            Err(PushError::ChannelClosed(_))
        ));
    }

    #[test]
    fn test_mark_closing_stops_sends() {
        // テスト項目: 切断処理中の接続には送信されない
        // given (前提条件):
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut connection = Connection::new(ConnectionId::generate(), tx);

        // when (操作):
        connection.mark_closing();
        let result = connection.send("hello");

        // then (期待する結果):
        assert_eq!(connection.state(), ConnectionState::Closing);
        assert!(matches!(result, Err(PushError::NotOpen(_))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_enqueues_payload() {
        // テスト項目: Open な接続への送信はキューに積まれる
        // given (前提条件):
        let (tx, mut rx) = mpsc::unbounded_channel();
        let connection = Connection::new(ConnectionId::generate(), tx);

        // when (操作):
        let result = connection.send("{\"type\":\"system\"}");

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.try_recv().unwrap(), "{\"type\":\"system\"}");
    }
}
