//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability,
//! independent of earlier draws (no bag, no history).
//! Seeded construction gives reproducible sequences for tests and replays
//! of a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Uniform piece kind generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
    seed: u64,
}

impl Randomizer {
    /// Create a randomizer with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a randomizer seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
