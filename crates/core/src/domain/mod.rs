// Domain Layer - Pure value types

pub mod constants;
pub mod error;
pub mod instant;
pub mod period;

// Re-exports
pub use error::DomainError;
pub use instant::Instant;
pub use period::Period;
