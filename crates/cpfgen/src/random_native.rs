use crate::DigitSource;
use rand::{Rng, SeedableRng, rng, rngs::StdRng};

/// A `DigitSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and automatically
/// reseeded periodically.
///
/// This type does **not** store the RNG itself; it accesses the thread-local
/// generator on each call, so it is a zero-sized value that may be freely
/// copied into request handlers on any thread.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl DigitSource for ThreadRandom {
    fn next_digit(&mut self) -> u8 {
        rng().random_range(0..10)
    }
}

/// A deterministic `DigitSource` backed by [`StdRng`].
///
/// Two sources built from the same seed produce the same digit stream, which
/// makes generated identifiers reproducible in tests and demos.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source seeded from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DigitSource for SeededRandom {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..10)
    }
}
