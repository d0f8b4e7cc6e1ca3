// Period Domain Model

use super::error::{DomainError, Result};
use super::instant::Instant;
use std::fmt;
use tracing::{debug, trace};

/// Directed interval between two instants.
///
/// A period runs forward (`end >= start`), backward (`end < start`) or is
/// null (`end == start`). Containment is half-open in the direction of
/// travel: the start is included, the end is excluded.
///
/// Fields are private and only readable through by-value accessors, so a
/// constructed `Period` never changes and can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Instant,
    end: Instant,
}

impl Period {
    /// Create a new Period
    ///
    /// # Arguments
    ///
    /// * `start` - Start instant (`None` is rejected)
    /// * `end` - End instant (`None` is rejected)
    ///
    /// # Errors
    ///
    /// * `DomainError::NullArgument` if either argument is missing
    /// * `DomainError::InvalidArgument` if either instant precedes the epoch
    ///
    /// # Example
    /// ```
    /// use period_core::{Instant, Period};
    ///
    /// let period = Period::new(Instant::from_millis(0), Instant::from_millis(10)).unwrap();
    /// assert_eq!(period.length(), 10);
    /// ```
    pub fn new(
        start: impl Into<Option<Instant>>,
        end: impl Into<Option<Instant>>,
    ) -> Result<Self> {
        let start = require("start", start.into())?;
        let end = require("end", end.into())?;

        let period = Self { start, end };
        trace!(
            start = %period.start,
            end = %period.end,
            length = period.length(),
            "Period created"
        );
        Ok(period)
    }

    /// Start instant (a copy)
    pub fn start(&self) -> Instant {
        self.start
    }

    /// End instant (a copy)
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Signed length in milliseconds: `end - start`
    pub fn length(&self) -> i64 {
        self.end - self.start
    }

    /// True iff `end` strictly precedes `start`
    pub fn is_backward(&self) -> bool {
        self.length() < 0
    }

    /// True iff `end == start`
    pub fn is_null(&self) -> bool {
        self.length() == 0
    }

    /// Check whether `candidate` lies within the period.
    ///
    /// - Forward: `start <= candidate < end`
    /// - Backward: `end < candidate <= start`
    /// - Null: never
    ///
    /// Returns `DomainError::NullArgument` if `candidate` is missing.
    pub fn contains(&self, candidate: impl Into<Option<Instant>>) -> Result<bool> {
        let Some(candidate) = candidate.into() else {
            debug!(argument = "candidate", "Rejected missing instant");
            return Err(DomainError::NullArgument {
                argument: "candidate",
            });
        };

        let inside = if self.is_backward() {
            self.end < candidate && candidate <= self.start
        } else {
            self.start <= candidate && candidate < self.end
        };
        Ok(inside)
    }
}

/// Validate a constructor argument
fn require(argument: &'static str, instant: Option<Instant>) -> Result<Instant> {
    let Some(instant) = instant else {
        debug!(argument, "Rejected missing instant");
        return Err(DomainError::NullArgument { argument });
    };

    if instant.is_before_epoch() {
        debug!(argument, millis = instant.as_millis(), "Rejected instant before epoch");
        return Err(DomainError::InvalidArgument {
            argument,
            millis: instant.as_millis(),
        });
    }

    Ok(instant)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({:+}ms)", self.start, self.end, self.length())
    }
}
