//! Random draws consumed by the generator.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Source of uniform integer draws. Seeding is the implementor's concern.
pub trait RandomSource {
    /// Uniform draw from the inclusive range `min..=max`.
    fn rand_range(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn rand_range(&mut self, min: i32, max: i32) -> i32 {
        (**self).rand_range(min, max)
    }
}

/// ChaCha8 stream seeded from a single `u64`.
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaSource {
    fn rand_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.rng.next_u64() % span) as i64) as i32
    }
}
