//! Injectable randomness.
//!
//! Every sampler takes a `RandomSource` so generation can be reproduced from
//! a seed and tests can substitute scripted values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed values.
pub trait RandomSource {
    /// Uniform draw from the closed range `[lo, hi]`.
    ///
    /// Returns `lo` when the range is empty, degenerate or has a non-finite
    /// bound.
    fn next_in_range(&mut self, lo: f64, hi: f64) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).next_in_range(lo, hi)
    }
}

/// ChaCha8-backed random source with a known seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local generator. The chosen seed is kept so the
    /// run can be repeated with `new`.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        if !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
            return lo;
        }
        if (hi - lo).is_finite() {
            return self.rng.random_range(lo..=hi);
        }
        // Width overflows f64; interpolate so neither term does.
        let t: f64 = self.rng.random();
        (lo * (1.0 - t) + hi * t).clamp(lo, hi)
    }
}
