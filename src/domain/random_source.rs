//! Injectable source of uniform indices for the draw.
//!
//! The registry never touches a random number generator directly; it asks
//! a [`RandomSource`] for an index in `[0, len)`. Production uses
//! [`ThreadRandom`], deterministic runs use [`SeededRandom`], and tests can
//! pin the outcome with [`ScriptedRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy for picking an index uniformly from `[0, len)`.
///
/// Callers guarantee `len >= 1`. Implementations must return a value
/// strictly below `len`; the registry rejects anything else with
/// [`crate::error::RegistryError::IndexOutOfRange`].
pub trait RandomSource: Send + std::fmt::Debug {
    /// Returns an index in `[0, len)`.
    fn index(&mut self, len: usize) -> usize;
}

/// Thread-local generator seeded from system entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates a new `ThreadRandom`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic generator: the same seed yields the same sequence of draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Indices are returned verbatim, without reducing them modulo `len`, so a
/// script can also exercise the out-of-range path. An empty script always
/// yields `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that replays `script` in order.
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Creates a source that always returns `index`.
    #[must_use]
    pub fn fixed(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, _len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let position = self.cursor % self.script.len();
        self.cursor = self.cursor.wrapping_add(1);
        self.script.get(position).copied().unwrap_or(0)
    }
}
