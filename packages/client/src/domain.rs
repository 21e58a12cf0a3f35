//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use crate::{dto::ClientMessage, error::ClientError};

/// Check if the client should exit immediately based on the error type.
///
/// An unusable URL will not get better by retrying.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(error, ClientError::InvalidUrl(_))
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}

/// Build the chat message for one input line.
///
/// Returns `None` for blank lines. An empty name is treated as no name.
pub fn build_chat_message(line: &str, name: Option<&str>) -> Option<ClientMessage> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    Some(ClientMessage::Message {
        text: text.to_string(),
        sender: name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    })
}
