//! Convenient imports for Tally.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use tally::prelude::*;
//!
//! let mut counter = create_counter();
//! assert_eq!(counter.call(), 1);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Counters
pub use crate::{create, create_counter, create_pair_counter, CounterKind, Tally};

// Maximum
pub use crate::{max_of, max_of_with, max_or_zero, EmptyInputPolicy, Value};

// Benchmark
pub use crate::{run_counter_demo, run_max_benchmark, BenchConfig};
