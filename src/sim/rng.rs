//! Random draws used by the spawn economy
//!
//! The simulation only ever asks for uniform integers and floats, so the
//! source is a small trait; `GameRng` is the seeded PCG implementation used
//! in play and in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random draws
pub trait RandomSource {
    /// Uniform integer in `[lo, hi]` (inclusive)
    fn int_between(&mut self, lo: i32, hi: i32) -> i32;
    /// Uniform float in `[lo, hi]`
    fn float_between(&mut self, lo: f32, hi: f32) -> f32;
}

/// Seeded, reproducible RNG
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the original seed
    pub fn reseed(&mut self) {
        self.inner = Pcg32::seed_from_u64(self.seed);
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn int_between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }

    fn float_between(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }
}
