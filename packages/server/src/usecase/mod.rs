//! UseCase 層
//!
//! 接続・切断・メッセージ送信の各ユースケースと、それらが共有する Broadcast Engine。

mod broadcast;
mod connect_participant;
mod disconnect_participant;
mod error;
mod send_message;

pub use broadcast::{BroadcastEngine, BroadcastReport, RelayedMessage};
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{BroadcastError, SendMessageError};
pub use send_message::SendMessageUseCase;
