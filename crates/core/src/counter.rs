//! Counter factory
//!
//! A counter is a value that owns private integer state. Each call bumps
//! every tracked field by one and hands back the new value of the primary
//! field `x`. State starts at zero, is reachable only through the counter,
//! and is dropped with it.
//!
//! ## Kinds
//!
//! - [`Counter`]: a single field `x`
//! - [`PairCounter`]: fields `x` and `y`, both incremented on every call,
//!   only `x` returned
//!
//! Calls take `&mut self`, so sharing a counter across threads needs
//! external synchronization such as a `Mutex`.
//!
//! # Example
//!
//! ```
//! use tally_core::create_counter;
//!
//! let mut counter = create_counter();
//! assert_eq!(counter.call(), 1);
//! assert_eq!(counter.call(), 2);
//! ```

use crate::error::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

// ============================================================================
// Tally trait
// ============================================================================

/// Increment-and-read behaviour shared by every counter kind
pub trait Tally: Send {
    /// Checked increment. Returns [`Error::Overflow`] and leaves the state
    /// untouched if `x` is already `u64::MAX`.
    fn try_call(&mut self) -> Result<u64>;

    /// Describe the counter's observable behaviour
    fn profile(&self) -> CounterProfile;

    /// Increment every field and return the new `x`.
    ///
    /// # Panics
    ///
    /// Panics once `x` would exceed `u64::MAX`, which takes 2^64 calls.
    fn call(&mut self) -> u64 {
        match self.try_call() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Which counter the factory should build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterKind {
    /// One field, `x`
    Single,
    /// Two fields, `x` and `y`
    Pair,
}

impl CounterKind {
    /// Names of the fields a counter of this kind tracks
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            CounterKind::Single => &["x"],
            CounterKind::Pair => &["x", "y"],
        }
    }
}

/// Observable description of a counter
///
/// Reports what a call does rather than how: which fields move, by how
/// much, and how many calls have been made. The primary field's current
/// value always equals `calls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterProfile {
    /// Counter kind
    pub kind: CounterKind,
    /// Fields incremented on every call
    pub fields: &'static [&'static str],
    /// Field whose post-increment value is returned
    pub returns: &'static str,
    /// Amount added to each field per call
    pub step: u64,
    /// Calls made so far
    pub calls: u64,
}

impl CounterProfile {
    fn new(kind: CounterKind, calls: u64) -> Self {
        Self {
            kind,
            fields: kind.fields(),
            returns: "x",
            step: 1,
            calls,
        }
    }

    /// Emit this profile as a structured `info` event
    pub fn log(&self) {
        info!(
            kind = ?self.kind,
            fields = ?self.fields,
            returns = self.returns,
            step = self.step,
            calls = self.calls,
            "counter increments each field by step and returns the new value"
        );
    }
}

// ============================================================================
// Counter
// ============================================================================

/// Single-field counter
#[derive(Debug, Default)]
pub struct Counter {
    x: u64,
}

impl Counter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value.
    ///
    /// # Panics
    ///
    /// Panics on `u64` overflow. See [`Counter::try_call`].
    pub fn call(&mut self) -> u64 {
        Tally::call(self)
    }

    /// Checked increment
    pub fn try_call(&mut self) -> Result<u64> {
        Tally::try_call(self)
    }

    /// Describe this counter
    pub fn profile(&self) -> CounterProfile {
        Tally::profile(self)
    }
}

impl Tally for Counter {
    fn try_call(&mut self) -> Result<u64> {
        self.x = self.x.checked_add(1).ok_or(Error::Overflow)?;
        Ok(self.x)
    }

    fn profile(&self) -> CounterProfile {
        CounterProfile::new(CounterKind::Single, self.x)
    }
}

/// Yields `1, 2, 3, ...` until the state would overflow
impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.try_call().ok()
    }
}

// ============================================================================
// PairCounter
// ============================================================================

/// Two-field counter. `y` shadows `x` and is never returned.
#[derive(Debug, Default)]
pub struct PairCounter {
    x: u64,
    y: u64,
}

impl PairCounter {
    /// Create a counter with both fields at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment both fields and return the new `x`.
    ///
    /// # Panics
    ///
    /// Panics on `u64` overflow. See [`PairCounter::try_call`].
    pub fn call(&mut self) -> u64 {
        Tally::call(self)
    }

    /// Checked increment
    pub fn try_call(&mut self) -> Result<u64> {
        Tally::try_call(self)
    }

    /// Describe this counter
    pub fn profile(&self) -> CounterProfile {
        Tally::profile(self)
    }
}

impl Tally for PairCounter {
    fn try_call(&mut self) -> Result<u64> {
        // Both fields move together; check both before writing either
        let x = self.x.checked_add(1).ok_or(Error::Overflow)?;
        let y = self.y.checked_add(1).ok_or(Error::Overflow)?;
        self.x = x;
        self.y = y;
        Ok(self.x)
    }

    fn profile(&self) -> CounterProfile {
        CounterProfile::new(CounterKind::Pair, self.x)
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Create a fresh single-field counter
pub fn create_counter() -> Counter {
    debug!(kind = ?CounterKind::Single, "creating counter");
    Counter::new()
}

/// Create a fresh two-field counter
pub fn create_pair_counter() -> PairCounter {
    debug!(kind = ?CounterKind::Pair, "creating counter");
    PairCounter::new()
}

/// Create a counter of the given kind behind the [`Tally`] trait
pub fn create(kind: CounterKind) -> Box<dyn Tally> {
    match kind {
        CounterKind::Single => Box::new(create_counter()),
        CounterKind::Pair => Box::new(create_pair_counter()),
    }
}

/// Create a counter as a plain closure.
///
/// The closure owns its [`Counter`]; nothing else can observe the state.
pub fn create_counter_fn() -> impl FnMut() -> u64 {
    let mut counter = create_counter();
    move || counter.call()
}
