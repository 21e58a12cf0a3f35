//! Clock abstraction for testability.

use lanchat_shared::time::now_millis;

use super::value_object::Timestamp;

/// Clock trait for dependency injection and testing
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current server time (milliseconds since the Unix epoch)
    fn now(&self) -> Timestamp;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(now_millis())
    }
}
