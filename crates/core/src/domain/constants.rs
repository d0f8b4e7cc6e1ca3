// Domain constants (No magic values)

/// One second in milliseconds
pub const MILLIS_PER_SECOND: i64 = 1000;

/// One hour in milliseconds
pub const MILLIS_PER_HOUR: i64 = 60 * 60 * MILLIS_PER_SECOND;

/// Default period length used by the contract self-check (1 hour)
pub const DEFAULT_CHECK_DELTA_MS: i64 = MILLIS_PER_HOUR;
