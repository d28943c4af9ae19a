//! Injectable randomness for the quiz generator.
//!
//! Production code draws from the thread-local RNG; tests and the `--seed`
//! flag use [`SeededRng`], which is intentionally simple and reproducible
//! across platforms.

use rand::Rng as _;

/// Abstraction over the randomness the quiz generator consumes.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, upper_exclusive)`; returns 0 when the bound is 0.
    fn next_index(&mut self, upper_exclusive: usize) -> usize;
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(rng: &mut impl RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Production source backed by `rand`'s thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().r#gen()
    }

    fn next_index(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper_exclusive)
    }
}

/// Tiny deterministic RNG for seeded quizzes and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        // 53 high-quality-ish bits into the mantissa.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_index(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u64() % upper_exclusive as u64) as usize
    }
}
