//! Seeded construction of the day-0 [`Population`].
//!
//! # Draw order
//!
//! All randomness comes from the caller's [`SimRng`], consumed in this
//! order (changing it changes every trajectory for a given seed):
//!
//! 1. One Fisher-Yates shuffle of the N compartment labels, laid out as
//!    S…S E…E I…I R…R before shuffling.
//! 2. For each agent in index order: durations for E, I, R (three draws).
//! 3. For each agent in index order: x, then y.
//!
//! # Usage
//!
//! ```rust
//! use seirs_agent::PopulationBuilder;
//! use seirs_core::{InitialCounts, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(100, 10)
//!     .initial(InitialCounts::new(80, 0, 20, 0))
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.count, 100);
//! ```

use seirs_core::{Cell, Compartment, CoreError, CoreResult, InitialCounts, MeanDurations, SimParams, SimRng};

use crate::Population;

/// Fluent builder for [`Population`].
pub struct PopulationBuilder {
    count:     usize,
    grid_side: u32,
    initial:   InitialCounts,
    means:     MeanDurations,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents on a `grid_side`² torus.
    ///
    /// Defaults: every agent susceptible, default mean durations.
    pub fn new(count: usize, grid_side: u32) -> Self {
        Self {
            count,
            grid_side,
            initial: InitialCounts::new(count, 0, 0, 0),
            means:   SimParams::default().mean_duration,
        }
    }

    /// Builder pre-filled from a run configuration.
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            count:     params.agent_count,
            grid_side: params.grid_side,
            initial:   params.initial,
            means:     params.mean_duration,
        }
    }

    /// Exact day-0 compartment quotas.
    pub fn initial(mut self, initial: InitialCounts) -> Self {
        self.initial = initial;
        self
    }

    /// Means of the exponential sojourn durations.
    pub fn mean_durations(mut self, means: MeanDurations) -> Self {
        self.means = means;
        self
    }

    /// Allocate and initialise every SoA array.
    ///
    /// # Errors
    ///
    /// Rejects quotas that do not sum to `count` and a zero grid side before
    /// drawing anything from `rng`.
    pub fn build(self, rng: &mut SimRng) -> CoreResult<Population> {
        let got = self.initial.total().unwrap_or(usize::MAX);
        if got != self.count {
            return Err(CoreError::InitialCountMismatch { expected: self.count, got });
        }
        if self.grid_side == 0 {
            return Err(CoreError::Config("grid side must be positive".into()));
        }

        let mut pop = Population::with_capacity(self.count);

        // 1. Exact quotas in block order, then one global shuffle.
        for c in Compartment::ALL {
            let quota = self.initial.get(c);
            pop.compartment.extend(std::iter::repeat_n(c, quota));
        }
        rng.shuffle(&mut pop.compartment);

        // 2. Fixed per-agent sojourn thresholds.
        for _ in 0..self.count {
            pop.duration_exposed.push(rng.neg_exp(self.means.exposed));
            pop.duration_infectious.push(rng.neg_exp(self.means.infectious));
            pop.duration_removed.push(rng.neg_exp(self.means.removed));
        }

        // 3. Uniform initial positions.
        for _ in 0..self.count {
            let x = rng.coord(self.grid_side);
            let y = rng.coord(self.grid_side);
            pop.position.push(Cell::new(x, y));
        }

        Ok(pop)
    }
}
