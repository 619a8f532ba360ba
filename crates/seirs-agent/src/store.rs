//! Core agent storage: `Population` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let here = population.position[agent.index()];  // O(1), cache-friendly
//! ```

use seirs_core::{AgentId, Cell, Compartment};

/// Structure-of-Arrays storage for all agent state.
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Mutable per-day state ─────────────────────────────────────────────
    /// Current SEIRS compartment.
    pub compartment: Vec<Compartment>,

    /// Whole days spent in the current compartment.  Reset to 0 on every
    /// transition, incremented once per daily update.
    pub time_in_state: Vec<u32>,

    /// Current grid cell.
    pub position: Vec<Cell>,

    // ── Sojourn thresholds (drawn once, never resampled) ──────────────────
    /// Exposed sojourn length.  Reused on every visit to `Exposed`.
    pub duration_exposed: Vec<f64>,

    /// Infectious sojourn length.  Reused on every visit to `Infectious`.
    pub duration_infectious: Vec<f64>,

    /// Removed sojourn length.  Reused on every visit to `Removed`.
    pub duration_removed: Vec<f64>,
}

impl Population {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Sojourn threshold for `agent` in `compartment`.
    ///
    /// `Susceptible` has no timed exit, so it returns `None`.
    #[inline]
    pub fn sojourn(&self, agent: AgentId, compartment: Compartment) -> Option<f64> {
        let i = agent.index();
        match compartment {
            Compartment::Susceptible => None,
            Compartment::Exposed     => Some(self.duration_exposed[i]),
            Compartment::Infectious  => Some(self.duration_infectious[i]),
            Compartment::Removed     => Some(self.duration_removed[i]),
        }
    }

    /// Move `agent` into `to` and restart its time-in-state clock.
    #[inline]
    pub fn enter(&mut self, agent: AgentId, to: Compartment) {
        self.compartment[agent.index()] = to;
        self.time_in_state[agent.index()] = 0;
    }

    /// Number of agents currently in `compartment` (O(N) scan).
    pub fn count_in(&self, compartment: Compartment) -> usize {
        self.compartment.iter().filter(|&&c| c == compartment).count()
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            count,
            compartment:         Vec::with_capacity(count),
            time_in_state:       vec![0; count],
            position:            Vec::with_capacity(count),
            duration_exposed:    Vec::with_capacity(count),
            duration_infectious: Vec::with_capacity(count),
            duration_removed:    Vec::with_capacity(count),
        }
    }
}
