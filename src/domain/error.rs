//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid caller input.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("--{flag} requires a value.")]
    MissingFlagValue { flag: String },

    #[error("{0}")]
    MissingArgument(String),

    #[error("Invalid post ID \"{0}\". Expected a positive integer.")]
    InvalidPostId(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
