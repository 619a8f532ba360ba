//! The single deterministic random stream of a run.
//!
//! # Determinism strategy
//!
//! Every stochastic decision of a run (compartment shuffle, durations,
//! positions, daily processing order, movement, infection tests) draws from
//! one `SimRng` in a fixed order.  Given the seed, the whole trajectory is
//! reproducible bit-for-bit on the same build.  Independent runs (replicates)
//! each own their own `SimRng`; nothing is shared between them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Owned by exactly one `Sim` and only touched by its sequential day loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform real in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform grid coordinate in `[0, side)`.
    ///
    /// `side` must be positive (guaranteed by `SimParams::validate`).
    #[inline]
    pub fn coord(&mut self, side: u32) -> u32 {
        self.0.gen_range(0..side)
    }

    /// Exponential sample with the given mean: `-mean * ln(1 - u)`.
    ///
    /// `u < 1` so the logarithm is always finite; a zero mean yields `0.0`.
    #[inline]
    pub fn neg_exp(&mut self, mean: f64) -> f64 {
        -mean * (1.0 - self.uniform()).ln()
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
