//! Message formatting utilities for client display.

use lanchat_shared::time::timestamp_to_local_clock;

/// Placeholder shown when the relay sent a timestamp chrono cannot represent
const UNKNOWN_TIME: &str = "--:--:--";

fn clock(timestamp: i64) -> String {
    timestamp_to_local_clock(timestamp).unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a chat message
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender name chosen by the author
    /// * `text` - The message text
    /// * `sent_at` - Server timestamp of the message (milliseconds)
    /// * `is_me` - Whether the message carries this client's own name
    pub fn format_chat_message(sender: &str, text: &str, sent_at: i64, is_me: bool) -> String {
        let me_suffix = if is_me { " (me)" } else { "" };
        format!("\n[{}] @{}{}: {}\n", clock(sent_at), sender, me_suffix, text)
    }

    /// Format a join/leave notification
    pub fn format_system_event(text: &str, at: i64) -> String {
        format!("\n[{}] * {}\n", clock(at), text)
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}
