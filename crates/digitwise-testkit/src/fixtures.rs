//! Test fixtures and helpers.
//!
//! Deterministic sources of large operands for integration tests and
//! benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use digitwise_core::BigUnsigned;

/// A seeded source of random operands.
pub struct OperandFixture {
    rng: StdRng,
}

impl OperandFixture {
    /// Create a fixture with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a fixture with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A canonical digit string of exactly `len` digits (`len >= 1`).
    pub fn digit_string(&mut self, len: usize) -> String {
        let len = len.max(1);
        let mut out = String::with_capacity(len);
        out.push(char::from(b'0' + self.rng.gen_range(1..=9u8)));
        for _ in 1..len {
            out.push(char::from(b'0' + self.rng.gen_range(0..=9u8)));
        }
        out
    }

    /// A number with exactly `len` digits.
    pub fn operand(&mut self, len: usize) -> BigUnsigned {
        let digits = self.digit_string(len);
        BigUnsigned::new(digits).expect("fixture digits are valid")
    }

    /// Two numbers with the given digit counts.
    pub fn pair(&mut self, len_a: usize, len_b: usize) -> (BigUnsigned, BigUnsigned) {
        (self.operand(len_a), self.operand(len_b))
    }
}

impl Default for OperandFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create `count` fixtures with consecutive seeds starting at `base`.
pub fn seeded_fixtures(base: u64, count: usize) -> Vec<OperandFixture> {
    (0..count as u64)
        .map(|i| OperandFixture::with_seed(base + i))
        .collect()
}
