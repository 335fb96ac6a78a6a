//! Core types and operations for Tally
//!
//! This crate holds all of Tally's behaviour:
//! - `counter`: counter factory and the [`Tally`] trait
//! - `max`: single-pass maximum with an explicit empty-input policy
//! - `value`: dynamically typed elements for the max scan
//! - `bench`: benchmark configuration, harness and reports
//! - `error`: error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bench;
pub mod counter;
pub mod error;
pub mod max;
pub mod value;

pub use bench::{
    generate_input, run_counter_demo, run_max_benchmark, BenchConfig, BenchReport, CounterDemo,
    DEMO_CALLS,
};
pub use counter::{
    create, create_counter, create_counter_fn, create_pair_counter, Counter, CounterKind,
    CounterProfile, PairCounter, Tally,
};
pub use error::{Error, Result};
pub use max::{max_index_of, max_of, max_of_with, max_or_zero, scan_max, EmptyInputPolicy};
pub use value::Value;
