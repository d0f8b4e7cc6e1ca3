// Self-check configuration

use period_core::{AppError, Instant, Result};

/// Parameters of the contract self-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    pub now: Instant,
    pub delta_ms: i64,
}

impl CheckConfig {
    /// Validate a check configuration
    ///
    /// `delta_ms` must exceed 1 so that `now + delta - 1` differs from `now`,
    /// and `now - delta` must not precede the epoch so the backward period
    /// can be built.
    pub fn new(now: Instant, delta_ms: i64) -> Result<Self> {
        if delta_ms <= 1 {
            return Err(AppError::Config(format!(
                "delta_ms must be greater than 1, got {}",
                delta_ms
            )));
        }

        if now.as_millis() < delta_ms {
            return Err(AppError::Config(format!(
                "delta_ms {} reaches before the epoch from now = {}",
                delta_ms, now
            )));
        }

        Ok(Self { now, delta_ms })
    }
}
