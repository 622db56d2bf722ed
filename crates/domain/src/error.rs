use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Transport error: {0}")]
    TransportError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
