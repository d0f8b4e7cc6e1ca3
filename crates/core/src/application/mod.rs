// Application Layer - Use Cases built on the domain types

pub mod period_clock;

// Re-exports
pub use period_clock::PeriodClock;
