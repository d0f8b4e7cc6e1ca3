// Time Provider Port (for testability)

use crate::domain::Instant;
use std::sync::atomic::{AtomicI64, Ordering};

/// Time provider interface (allows mocking in tests)
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Current time as an [`Instant`]
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_millis())
    }
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually driven clock (deterministic tests and replays)
#[derive(Debug, Default)]
pub struct FixedTimeProvider {
    millis: AtomicI64,
}

impl FixedTimeProvider {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.millis.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}
