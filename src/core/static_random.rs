// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform draws in `[0, 1)`.
///
/// Consumers that need randomness take this capability as an explicit
/// argument instead of reaching for an ambient global generator, so a run
/// can be made reproducible by injecting a seeded source.
pub trait RandomSource {
    /// Returns the next uniform draw in `[0, 1)`.
    fn next_double(&mut self) -> f64;
}

/// A deterministic pseudo-random source backed by ChaCha8.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    /// Creates a source seeded from operating-system entropy.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        StaticRandom {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Creates a source from a fixed seed. Two sources built from the same
    /// seed produce identical streams.
    pub fn from_seed(seed: u64) -> Self {
        StaticRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn next(&mut self) -> u32 {
        self.rng.random()
    }

    pub fn next_range(&mut self, min_value: u32, max_value: u32) -> u32 {
        self.rng.random_range(min_value..max_value)
    }

    pub fn next_double(&mut self) -> f64 {
        self.rng.random()
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StaticRandom {
    fn next_double(&mut self) -> f64 {
        StaticRandom::next_double(self)
    }
}
