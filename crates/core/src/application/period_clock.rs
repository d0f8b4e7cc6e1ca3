//! Period Clock - Periods anchored to the current time
//!
//! Builds periods relative to "now" and answers whether a period is
//! currently in effect. Time is injected through [`TimeProvider`] so the
//! service is deterministic under test.

use crate::domain::{DomainError, Instant, Period};
use crate::error::Result;
use crate::port::TimeProvider;
use std::sync::Arc;
use tracing::debug;

pub struct PeriodClock {
    time_provider: Arc<dyn TimeProvider>,
}

impl PeriodClock {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }

    pub fn now(&self) -> Instant {
        self.time_provider.now()
    }

    /// Create `[now, now + length_ms)`
    ///
    /// A negative length yields a backward period, zero a null period.
    /// An end outside the `i64` range is reported as an invalid `end`.
    pub fn period_from_now(&self, length_ms: i64) -> Result<Period> {
        let now = self.now();
        let end = now.checked_add(length_ms).ok_or(DomainError::InvalidArgument {
            argument: "end",
            millis: now.as_millis().saturating_add(length_ms),
        })?;
        let period = Period::new(now, end)?;

        debug!(
            start = %period.start(),
            end = %period.end(),
            length_ms = length_ms,
            "Period created from now"
        );

        Ok(period)
    }

    /// Check if `now` lies within the period
    pub fn is_current(&self, period: &Period) -> bool {
        let now = self.now();
        let current = matches!(period.contains(now), Ok(true));

        debug!(
            start = %period.start(),
            end = %period.end(),
            now = %now,
            current = current,
            "Checked period against now"
        );

        current
    }

    /// Milliseconds left until the period's end, in its direction of travel
    ///
    /// Returns `None` when the period is not current.
    pub fn remaining(&self, period: &Period) -> Option<i64> {
        let now = self.now();
        if !matches!(period.contains(now), Ok(true)) {
            return None;
        }

        Some((period.end() - now).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::port::time_provider::MockTimeProvider;
    use crate::port::FixedTimeProvider;

    const NOW: i64 = 1_700_000_000_000;

    fn clock_at(millis: i64) -> PeriodClock {
        let mut time_provider = MockTimeProvider::new();
        time_provider
            .expect_now()
            .return_const(Instant::from_millis(millis));
        PeriodClock::new(Arc::new(time_provider))
    }

    #[test]
    fn test_period_from_now_forward() {
        let clock = clock_at(NOW);
        let period = clock.period_from_now(5_000).unwrap();

        assert_eq!(period.start(), Instant::from_millis(NOW));
        assert_eq!(period.end(), Instant::from_millis(NOW + 5_000));
        assert!(clock.is_current(&period));
    }

    #[test]
    fn test_period_from_now_backward_and_null() {
        let clock = clock_at(NOW);

        let backward = clock.period_from_now(-5_000).unwrap();
        assert!(backward.is_backward());
        assert!(clock.is_current(&backward));

        let null = clock.period_from_now(0).unwrap();
        assert!(null.is_null());
        assert!(!clock.is_current(&null));
    }

    #[test]
    fn test_period_from_now_before_epoch() {
        let clock = clock_at(1_000);
        let err = clock.period_from_now(-2_000).unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidArgument {
                argument: "end",
                millis: -1_000
            })
        ));
    }

    #[test]
    fn test_period_from_now_out_of_range() {
        let clock = clock_at(NOW);

        let err = clock.period_from_now(i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidArgument {
                argument: "end",
                millis: i64::MAX
            })
        ));

        let err = clock.period_from_now(i64::MIN).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidArgument { argument: "end", .. })
        ));
    }

    #[test]
    fn test_is_current_follows_time() {
        let time_provider = Arc::new(FixedTimeProvider::new(NOW));
        let clock = PeriodClock::new(time_provider.clone());
        let period = clock.period_from_now(100).unwrap();

        time_provider.advance(99);
        assert!(clock.is_current(&period));

        time_provider.advance(1);
        assert!(!clock.is_current(&period));
    }

    #[test]
    fn test_remaining() {
        let time_provider = Arc::new(FixedTimeProvider::new(NOW));
        let clock = PeriodClock::new(time_provider.clone());
        let forward = clock.period_from_now(100).unwrap();
        let backward = clock.period_from_now(-100).unwrap();

        assert_eq!(clock.remaining(&forward), Some(100));
        assert_eq!(clock.remaining(&backward), Some(100));

        time_provider.advance(40);
        assert_eq!(clock.remaining(&forward), Some(60));
        assert_eq!(clock.remaining(&backward), None);

        time_provider.set(NOW - 40);
        assert_eq!(clock.remaining(&forward), None);
        assert_eq!(clock.remaining(&backward), Some(60));
    }
}
