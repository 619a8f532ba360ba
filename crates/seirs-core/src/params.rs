//! Run configuration.
//!
//! `SimParams` is immutable for the lifetime of a run.  It is typically built
//! from `Default` and a handful of overrides, or loaded from a JSON file by
//! the application crate (`serde` feature) and passed to the sim builder.

use crate::{Compartment, CoreError, CoreResult};

// ── InitialCounts ─────────────────────────────────────────────────────────────

/// Exact number of agents placed in each compartment at day 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialCounts {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infectious:  usize,
    pub removed:     usize,
}

impl InitialCounts {
    pub fn new(susceptible: usize, exposed: usize, infectious: usize, removed: usize) -> Self {
        Self { susceptible, exposed, infectious, removed }
    }

    /// Quota for one compartment.
    pub fn get(&self, compartment: Compartment) -> usize {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Exposed     => self.exposed,
            Compartment::Infectious  => self.infectious,
            Compartment::Removed     => self.removed,
        }
    }

    /// Sum of all four quotas, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        self.susceptible
            .checked_add(self.exposed)?
            .checked_add(self.infectious)?
            .checked_add(self.removed)
    }
}

// ── MeanDurations ─────────────────────────────────────────────────────────────

/// Mean sojourn lengths (days) of the three timed compartments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanDurations {
    pub exposed:    f64,
    pub infectious: f64,
    pub removed:    f64,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level configuration of one agent-based run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Side length L of the L×L toroidal grid.
    pub grid_side: u32,

    /// Population size N.  Fixed for the whole run.
    pub agent_count: usize,

    /// Number of simulated days T.  The output holds T + 1 rows (day 0..=T).
    pub days: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Day-0 compartment quotas.  Must sum to `agent_count`.
    pub initial: InitialCounts,

    /// Means of the per-agent exponential sojourn durations.
    pub mean_duration: MeanDurations,

    /// Coefficient in `p = 1 - exp(-infection_force * NI)`.
    pub infection_force: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            grid_side:   300,
            agent_count: 20_000,
            days:        730,
            seed:        12_345,
            initial:     InitialCounts::new(19_980, 0, 20, 0),
            mean_duration: MeanDurations {
                exposed:    3.0,
                infectious: 7.0,
                removed:    365.0,
            },
            infection_force: 0.5,
        }
    }
}

impl SimParams {
    /// Same configuration with a different seed (for replicate batches).
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..self.clone() }
    }

    /// Number of cells in the grid (`L * L`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_side as usize * self.grid_side as usize
    }

    /// Reject configurations that must never reach agent allocation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_side == 0 {
            return Err(CoreError::Config("grid side must be positive".into()));
        }
        if (self.grid_side as usize).checked_mul(self.grid_side as usize).is_none() {
            return Err(CoreError::Config(format!(
                "grid side {} is too large to address",
                self.grid_side
            )));
        }
        if self.agent_count == 0 {
            return Err(CoreError::Config("agent count must be positive".into()));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(CoreError::Config(format!(
                "agent count {} exceeds the AgentId range",
                self.agent_count
            )));
        }

        let got = self.initial.total().unwrap_or(usize::MAX);
        if got != self.agent_count {
            return Err(CoreError::InitialCountMismatch {
                expected: self.agent_count,
                got,
            });
        }

        let means = [
            ("exposed", self.mean_duration.exposed),
            ("infectious", self.mean_duration.infectious),
            ("removed", self.mean_duration.removed),
        ];
        for (name, mean) in means {
            if !mean.is_finite() || mean < 0.0 {
                return Err(CoreError::Config(format!(
                    "mean {name} duration must be finite and non-negative, got {mean}"
                )));
            }
        }

        if !self.infection_force.is_finite() || self.infection_force < 0.0 {
            return Err(CoreError::Config(format!(
                "infection force must be finite and non-negative, got {}",
                self.infection_force
            )));
        }
        Ok(())
    }
}
