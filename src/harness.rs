//! Benchmark entry points.

use crate::error::Result;
use tally_core::{BenchConfig, BenchReport, CounterDemo};

/// Time the max scan over a generated list.
///
/// # Example
///
/// ```
/// use tally::{run_max_benchmark, BenchConfig};
///
/// let report = run_max_benchmark(&BenchConfig::quick())?;
/// assert_eq!(report.max, 999);
/// # Ok::<(), tally::Error>(())
/// ```
pub fn run_max_benchmark(config: &BenchConfig) -> Result<BenchReport> {
    Ok(tally_core::run_max_benchmark(config)?)
}

/// Deterministic shuffled input for a configuration.
pub fn generate_input(config: &BenchConfig) -> Result<Vec<i64>> {
    Ok(tally_core::generate_input(config)?)
}

/// Call one counter of each kind and collect the results.
pub fn run_counter_demo() -> CounterDemo {
    tally_core::run_counter_demo()
}
