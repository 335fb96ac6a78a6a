//! Error types for Tally core operations
//!
//! Every fallible operation in the core crate returns [`Result`]. Counters
//! and the max scan cannot fail on well-formed input; the variants below
//! cover the malformed cases the scan rejects and the checked counter path.

use thiserror::Error;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Element is not a number
    #[error("wrong type at index {index}: expected {expected}, got {actual}")]
    WrongType {
        /// Position of the offending element
        index: usize,
        /// Type the operation requires
        expected: &'static str,
        /// Type that was found
        actual: &'static str,
    },

    /// Element cannot be ordered against the running maximum (NaN)
    #[error("unorderable value at index {index}")]
    Unorderable {
        /// Position of the offending element
        index: usize,
    },

    /// Empty input under [`EmptyInputPolicy::Error`](crate::EmptyInputPolicy::Error)
    #[error("empty input")]
    EmptyInput,

    /// Counter state would exceed `u64::MAX`
    #[error("counter overflow")]
    Overflow,

    /// Benchmark configuration rejected by validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
