//! Time-related utilities.

use chrono::{DateTime, Local, Utc};

/// Get current Unix timestamp (milliseconds since the epoch)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to a short `HH:MM:SS` local time
///
/// Returns `None` when the timestamp is outside the range chrono can represent.
pub fn timestamp_to_local_clock(timestamp_millis: i64) -> Option<String> {
    let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_millis)?;
    Some(utc.with_timezone(&Local).format("%H:%M:%S").to_string())
}
