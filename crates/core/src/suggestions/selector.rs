//! Injected choice of outerwear for layered suggestions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one of `len` outerwear candidates. Indices past the end wrap around.
pub trait OuterwearSelector {
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform random choice
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Seeded when `seed` is set, otherwise entropy-backed
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }
}

impl OuterwearSelector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always takes the first candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl OuterwearSelector for FirstSelector {
    fn select(&mut self, _len: usize) -> usize {
        0
    }
}

impl<F> OuterwearSelector for F
where
    F: FnMut(usize) -> usize,
{
    fn select(&mut self, len: usize) -> usize {
        self(len)
    }
}
