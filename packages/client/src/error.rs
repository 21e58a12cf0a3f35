//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The relay URL cannot be used
    #[error("Invalid relay URL: {0}")]
    InvalidUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The relay closed the connection or the socket failed
    #[error("Connection lost")]
    ConnectionLost,

    /// Reconnection attempts were exhausted
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectExhausted(u32),
}
