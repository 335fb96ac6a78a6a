//! Benchmark harness
//!
//! Times [`max_or_zero`] over a generated list and runs the counter
//! demonstration. Both produce serializable reports so the CLI can print
//! them as text or JSON.
//!
//! ## Usage
//!
//! ```
//! use tally_core::{run_max_benchmark, BenchConfig};
//!
//! let report = run_max_benchmark(&BenchConfig::quick()).unwrap();
//! assert_eq!(report.max, 999);
//! ```

use crate::counter::{create, CounterKind, CounterProfile};
use crate::error::{Error, Result};
use crate::max::{max_or_zero, EmptyInputPolicy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ============================================================================
// Config
// ============================================================================

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in the generated list
    pub len: usize,
    /// Timed passes over the list
    pub runs: usize,
    /// Seed for the shuffle
    pub seed: u64,
    /// Empty-input policy reported alongside the result
    pub empty_policy: EmptyInputPolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            len: 1_000_000,
            runs: 1,
            seed: 42,
            empty_policy: EmptyInputPolicy::Zero,
        }
    }
}

impl BenchConfig {
    /// Small list, single pass. Used by tests and doc examples.
    pub fn quick() -> Self {
        BenchConfig {
            len: 1_000,
            runs: 1,
            ..Default::default()
        }
    }

    /// Default list, several passes for a steadier average
    pub fn thorough() -> Self {
        BenchConfig {
            runs: 10,
            ..Default::default()
        }
    }

    /// Set the list length
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Set the number of timed passes
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the empty-input policy
    pub fn with_empty_policy(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// List length as the largest generated element bound
    fn len_i64(&self) -> Result<i64> {
        i64::try_from(self.len)
            .map_err(|_| Error::InvalidConfig(format!("len {} exceeds i64::MAX", self.len)))
    }

    /// Reject configurations that would time nothing
    pub fn validate(&self) -> Result<()> {
        self.len_i64()?;
        if self.len == 0 && self.empty_policy == EmptyInputPolicy::Error {
            return Err(Error::EmptyInput);
        }
        if self.runs == 0 {
            return Err(Error::InvalidConfig("runs must be non-zero".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Max benchmark
// ============================================================================

/// Result of [`run_max_benchmark`]
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Elements scanned per pass
    pub len: usize,
    /// Timed passes
    pub runs: usize,
    /// Maximum found
    pub max: i64,
    /// Policy applied had the list been empty
    pub empty_policy: EmptyInputPolicy,
    /// Total wall-clock time across all passes
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Average wall-clock time of one pass
    #[serde(serialize_with = "serialize_secs")]
    pub per_run: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Deterministic shuffled list `0..len`
pub fn generate_input(config: &BenchConfig) -> Result<Vec<i64>> {
    let mut data: Vec<i64> = (0..config.len_i64()?).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    data.shuffle(&mut rng);
    Ok(data)
}

/// Time `max_or_zero` over a generated list
pub fn run_max_benchmark(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;
    let data = generate_input(config)?;
    debug!(len = data.len(), seed = config.seed, "generated benchmark input");

    let mut max = 0;
    let start = Instant::now();
    for _ in 0..config.runs {
        max = max_or_zero(black_box(data.as_slice()));
    }
    let elapsed = start.elapsed();
    let per_run = elapsed.div_f64(config.runs as f64);

    info!(
        len = config.len,
        runs = config.runs,
        max,
        elapsed_secs = elapsed.as_secs_f64(),
        "max benchmark complete"
    );

    Ok(BenchReport {
        len: config.len,
        runs: config.runs,
        max,
        empty_policy: config.empty_policy,
        elapsed,
        per_run,
    })
}

// ============================================================================
// Counter demo
// ============================================================================

/// Calls made on each counter by [`run_counter_demo`]
pub const DEMO_CALLS: usize = 2;

/// Result of [`run_counter_demo`]
#[derive(Debug, Clone, Serialize)]
pub struct CounterDemo {
    /// Values returned by the single-field counter
    pub single: Vec<u64>,
    /// Values returned by the two-field counter
    pub pair: Vec<u64>,
    /// Profiles of both counters after the calls
    pub profiles: Vec<CounterProfile>,
}

/// Create one counter of each kind and call each [`DEMO_CALLS`] times
pub fn run_counter_demo() -> CounterDemo {
    let mut results = Vec::with_capacity(2);
    let mut profiles = Vec::with_capacity(2);

    for kind in [CounterKind::Single, CounterKind::Pair] {
        let mut counter = create(kind);
        let values: Vec<u64> = (0..DEMO_CALLS).map(|_| counter.call()).collect();
        let profile = counter.profile();
        profile.log();
        results.push(values);
        profiles.push(profile);
    }

    let pair = results.pop().unwrap_or_default();
    let single = results.pop().unwrap_or_default();
    CounterDemo {
        single,
        pair,
        profiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.len, 1_000_000);
        assert_eq!(config.runs, 1);
        assert_eq!(config.empty_policy, EmptyInputPolicy::Zero);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(BenchConfig::quick().len, 1_000);
        assert_eq!(BenchConfig::thorough().runs, 10);
    }

    #[test]
    fn test_validate_rejects_zero_runs() {
        let config = BenchConfig::quick().with_runs(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_empty_list() {
        let zero = BenchConfig::quick().with_len(0);
        assert!(zero.validate().is_ok());

        let strict = zero.with_empty_policy(EmptyInputPolicy::Error);
        assert_eq!(strict.validate(), Err(Error::EmptyInput));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_rejects_len_beyond_i64() {
        let config = BenchConfig::quick().with_len(usize::MAX);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(generate_input(&config), Err(Error::InvalidConfig(_))));
        assert!(matches!(run_max_benchmark(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_accepts_len_at_i64_max() {
        let config = BenchConfig::quick().with_len(i64::MAX as usize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generate_input_is_deterministic_permutation() {
        let config = BenchConfig::quick().with_seed(7);
        let a = generate_input(&config).unwrap();
        let b = generate_input(&config).unwrap();
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..1_000).collect::<Vec<i64>>());
    }

    #[test]
    fn test_max_benchmark_result() {
        let report = run_max_benchmark(&BenchConfig::quick().with_runs(3)).unwrap();
        assert_eq!(report.max, 999);
        assert_eq!(report.len, 1_000);
        assert_eq!(report.runs, 3);
        assert!(report.per_run <= report.elapsed);
    }

    #[test]
    fn test_max_benchmark_empty_list() {
        let report = run_max_benchmark(&BenchConfig::quick().with_len(0)).unwrap();
        assert_eq!(report.max, 0);
    }

    #[test]
    fn test_counter_demo() {
        let demo = run_counter_demo();
        assert_eq!(demo.single, vec![1, 2]);
        assert_eq!(demo.pair, vec![1, 2]);
        assert_eq!(demo.profiles.len(), 2);
        assert_eq!(demo.profiles[0].kind, CounterKind::Single);
        assert_eq!(demo.profiles[1].kind, CounterKind::Pair);
        assert!(demo.profiles.iter().all(|p| p.calls == DEMO_CALLS as u64));
    }

    #[test]
    fn test_report_serializes_seconds() {
        let report = run_max_benchmark(&BenchConfig::quick()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["max"], 999);
        assert!(json["elapsed"].is_f64());
    }
}
