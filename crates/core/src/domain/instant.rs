// Instant Domain Model

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Point in time as milliseconds since the Unix epoch.
///
/// `Instant` is `Copy`: every time one crosses into or out of a
/// [`Period`](super::Period) the value is duplicated, so mutating a local
/// binding (through [`Instant::set_millis`] or the assignment operators)
/// never reaches another owner's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(i64);

impl Instant {
    /// 1970-01-01T00:00:00Z
    pub const EPOCH: Instant = Instant(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Overwrite this instant in place.
    pub fn set_millis(&mut self, millis: i64) {
        self.0 = millis;
    }

    /// Shift by `millis`, `None` on overflow
    pub const fn checked_add(&self, millis: i64) -> Option<Instant> {
        match self.0.checked_add(millis) {
            Some(sum) => Some(Instant(sum)),
            None => None,
        }
    }

    pub const fn is_before_epoch(&self) -> bool {
        self.0 < 0
    }

    /// Convert to a chrono timestamp, `None` when outside chrono's range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

impl Add<i64> for Instant {
    type Output = Instant;

    fn add(self, millis: i64) -> Instant {
        Instant(self.0 + millis)
    }
}

impl Sub<i64> for Instant {
    type Output = Instant;

    fn sub(self, millis: i64) -> Instant {
        Instant(self.0 - millis)
    }
}

/// Signed distance in milliseconds
impl Sub<Instant> for Instant {
    type Output = i64;

    fn sub(self, other: Instant) -> i64 {
        self.0 - other.0
    }
}

impl AddAssign<i64> for Instant {
    fn add_assign(&mut self, millis: i64) {
        self.0 += millis;
    }
}

impl SubAssign<i64> for Instant {
    fn sub_assign(&mut self, millis: i64) {
        self.0 -= millis;
    }
}
