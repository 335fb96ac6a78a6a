//! Unified error types for Tally.
//!
//! This module provides a clean error type that wraps core errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All Tally errors.
///
/// This is the canonical error type for all public Tally operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Wrong type for operation
    #[error("wrong type at index {index}: expected {expected}, got {actual}")]
    WrongType {
        /// Position of the offending element
        index: usize,
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Element has no ordering against the others (NaN)
    #[error("unorderable value at index {index}")]
    Unorderable {
        /// Position of the offending element
        index: usize,
    },

    /// Empty input where the policy forbids it
    #[error("empty input")]
    EmptyInput,

    /// Numeric overflow
    #[error("overflow")]
    Overflow,

    /// Constraint violation (invalid configuration, limits exceeded)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Result type for Tally operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable code for this error, suitable for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::WrongType { .. } => "WrongType",
            Error::Unorderable { .. } => "Unorderable",
            Error::EmptyInput => "EmptyInput",
            Error::Overflow => "Overflow",
            Error::ConstraintViolation(_) => "ConstraintViolation",
        }
    }

    /// Check if this error was caused by the input data rather than configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::WrongType { .. } | Error::Unorderable { .. } | Error::EmptyInput
        )
    }

    /// Check if this is an overflow error.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow)
    }
}

// Convert from core errors
impl From<tally_core::Error> for Error {
    fn from(e: tally_core::Error) -> Self {
        use tally_core::Error as CoreError;
        match e {
            CoreError::WrongType {
                index,
                expected,
                actual,
            } => Error::WrongType {
                index,
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            CoreError::Unorderable { index } => Error::Unorderable { index },
            CoreError::EmptyInput => Error::EmptyInput,
            CoreError::Overflow => Error::Overflow,
            CoreError::InvalidConfig(msg) => Error::ConstraintViolation(msg),
        }
    }
}
