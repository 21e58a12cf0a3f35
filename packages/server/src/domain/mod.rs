//! Domain 層
//!
//! 値オブジェクト、エンティティ、接続モデル、および Infrastructure 層が
//! 実装するインターフェース（`ConnectionRegistry`, `Clock`）を定義します。

pub mod clock;
pub mod connection;
pub mod entity;
pub mod error;
pub mod registry;
pub mod value_object;

pub use clock::{Clock, SystemClock};
pub use connection::{Connection, ConnectionState, PusherChannel};
pub use entity::{ChatMessage, SystemEvent, SystemEventKind};
pub use error::{InboundRejection, PushError};
pub use registry::ConnectionRegistry;
pub use value_object::{
    ANONYMOUS_SENDER, ConnectionId, MAX_SENDER_CHARS, MAX_TEXT_CHARS, MessageId, MessageIdFactory,
    MessageText, SenderName, Timestamp,
};
