//! # Tally
//!
//! Stateful counters and a single-pass maximum, plus the benchmark that
//! times them.
//!
//! ## Quick Start
//!
//! ```
//! use tally::prelude::*;
//!
//! // Counters own their state; each call returns the new value
//! let mut counter = create_counter();
//! assert_eq!(counter.call(), 1);
//! assert_eq!(counter.call(), 2);
//!
//! // Maximum of a sequence, zero when empty
//! let values: Vec<Value> = vec![3.into(), 1.into(), 4.into()];
//! assert_eq!(max_of(&values)?, Value::Int(4));
//! assert_eq!(max_of(&[])?, Value::Int(0));
//! # Ok::<(), tally::Error>(())
//! ```
//!
//! ## Modules
//!
//! - Counters: [`create_counter`], [`create_pair_counter`], [`create`]
//! - Maximum: [`max_of`], [`max_of_with`], [`max_or_zero`]
//! - Benchmark: [`run_max_benchmark`], [`run_counter_demo`]

#![warn(missing_docs)]

mod error;
mod harness;
mod sequence;

pub mod prelude;

pub use error::{Error, Result};

// Counters are infallible in normal use; re-export them as-is
pub use tally_core::{
    create, create_counter, create_counter_fn, create_pair_counter, Counter, CounterKind,
    CounterProfile, PairCounter, Tally,
};

// Values and policies
pub use tally_core::{EmptyInputPolicy, Value};

// Benchmark types
pub use tally_core::{BenchConfig, BenchReport, CounterDemo, DEMO_CALLS};

pub use harness::{generate_input, run_counter_demo, run_max_benchmark};
pub use sequence::{max_index_of, max_of, max_of_with, max_or_zero};
