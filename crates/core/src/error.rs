//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only construction-time validation and out-of-bounds removal fail hard.
/// Capacity overflow is a normal outcome and is reported through return values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A Cola was requested in a container kind other than `can` or `bottle`.
    #[error("invalid container kind: {0} (use 'can' or 'bottle')")]
    InvalidContainerKind(String),

    /// A removal index was outside the current inventory bounds.
    #[error("index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value failed validation (e.g. a beverage record its constructors could not produce).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_container_kind(kind: impl Into<String>) -> Self {
        Self::InvalidContainerKind(kind.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_input() {
        let err = DomainError::invalid_container_kind("large");
        assert_eq!(err.to_string(), "invalid container kind: large (use 'can' or 'bottle')");

        let err = DomainError::index_out_of_range(5, 2);
        assert_eq!(err.to_string(), "index 5 out of range (len: 2)");
    }
}
