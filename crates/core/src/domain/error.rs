// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing argument: {argument}")]
    NullArgument { argument: &'static str },

    #[error("Invalid argument: {argument} = {millis}ms is out of range")]
    InvalidArgument { argument: &'static str, millis: i64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
