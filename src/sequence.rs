//! Maximum-of-sequence operations.
//!
//! Thin wrappers over `tally_core::max` that return the public [`Error`](crate::Error).
//!
//! # Example
//!
//! ```
//! use tally::{max_of_with, EmptyInputPolicy, Error, Value};
//!
//! let values = vec![Value::Int(3), Value::Float(9.5), Value::Int(2)];
//! assert_eq!(max_of_with(&values, EmptyInputPolicy::Zero)?, Value::Float(9.5));
//! assert_eq!(max_of_with(&[], EmptyInputPolicy::Error), Err(Error::EmptyInput));
//! # Ok::<(), Error>(())
//! ```

use crate::error::Result;
use tally_core::{EmptyInputPolicy, Value};

/// Maximum of a sequence, `Int(0)` when empty.
///
/// Fails with `WrongType` on a non-number and `Unorderable` on NaN.
pub fn max_of(values: &[Value]) -> Result<Value> {
    Ok(tally_core::max_of(values)?)
}

/// Maximum of a sequence with an explicit empty-input policy.
pub fn max_of_with(values: &[Value], policy: EmptyInputPolicy) -> Result<Value> {
    Ok(tally_core::max_of_with(values, policy)?)
}

/// Index of the first maximal element.
///
/// Returns `None` for empty input under [`EmptyInputPolicy::Zero`].
pub fn max_index_of(values: &[Value], policy: EmptyInputPolicy) -> Result<Option<usize>> {
    Ok(tally_core::max_index_of(values, policy)?)
}

/// Typed maximum for plain numbers, `T::default()` when empty.
pub fn max_or_zero<T>(items: &[T]) -> T
where
    T: PartialOrd + Copy + Default,
{
    tally_core::max_or_zero(items)
}
