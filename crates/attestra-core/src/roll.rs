//! Injectable random source for probabilistic outcomes.
//!
//! The demo decides document validity and lookup fallback success by a
//! weighted coin flip. Keeping the flip behind a trait lets the pages draw
//! from entropy while tests pin a seed (or a fixed answer) and exercise both
//! branches deterministically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A weighted coin.
pub trait Roll {
    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// [`Roll`] backed by a small PRNG.
///
/// Entropy-seeded in the application, explicitly seeded in tests.
pub struct EntropyRoll {
    rng: SmallRng,
}

impl EntropyRoll {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRoll {
    fn default() -> Self {
        Self::new()
    }
}

impl Roll for EntropyRoll {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }
}
