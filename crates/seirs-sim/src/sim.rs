//! The `Sim` struct and its day loop.

use seirs_agent::Population;
use seirs_core::{AgentId, Cell, Compartment, Day, SimParams, SimRng};
use seirs_grid::DensityGrid;
use tracing::{debug, info};

use crate::{Census, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` holds the complete mutable state of one run (population, density
/// grid, random stream).  Nothing is global, so independent runs can coexist
/// in one process.
///
/// Each day is processed strictly sequentially in a freshly shuffled agent
/// order; every agent's move and transition is visible to the agents
/// processed after it on the same day.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Immutable run configuration.
    pub params: SimParams,

    /// Last completed day.  `Day::ZERO` before the first update pass.
    pub day: Day,

    /// Per-agent state (SoA arrays).
    pub population: Population,

    /// Infectious counts per cell, maintained incrementally.
    pub grid: DensityGrid,

    /// The run's single random stream.
    pub rng: SimRng,

    /// Processing order buffer, reshuffled in place every day.
    pub(crate) order: Vec<AgentId>,

    pub(crate) initial_reported: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current day to `params.days`.
    ///
    /// Reports day 0 first (if not already reported), then one census per
    /// completed day, then calls `on_sim_end`.  An observer error aborts the
    /// run immediately.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.report_initial(observer)?;
        let end = Day(self.params.days);
        while self.day < end {
            self.advance(observer)?;
        }
        info!(seed = self.params.seed, days = self.day.0, "simulation finished");
        observer.on_sim_end(self.day)
    }

    /// Run exactly `n` days from the current position (ignores `params.days`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        self.report_initial(observer)?;
        for _ in 0..n {
            self.advance(observer)?;
        }
        Ok(())
    }

    /// Perform one full update pass (one simulated day) without reporting.
    pub fn step_day(&mut self) {
        self.rng.shuffle(&mut self.order);

        let order = std::mem::take(&mut self.order);
        for &agent in &order {
            self.update_agent(agent);
        }
        self.order = order;
        self.day = self.day.next();
    }

    /// Current compartment counts.
    pub fn census(&self) -> Census {
        Census::take(&self.population)
    }

    /// Rebuild the density grid from scratch and compare it with the
    /// incrementally maintained one.  Diagnostic only.
    pub fn check_grid(&self) -> bool {
        let rebuilt = DensityGrid::from_agents(
            self.params.grid_side,
            &self.population.compartment,
            &self.population.position,
        );
        rebuilt == self.grid
    }

    // ── Day loop ──────────────────────────────────────────────────────────

    fn report_initial<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.initial_reported {
            return Ok(());
        }
        self.initial_reported = true;
        let census = self.census();
        debug!(day = self.day.0, s = census.susceptible, e = census.exposed,
               i = census.infectious, r = census.removed, "census");
        observer.on_census(self.day, &census)
    }

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_day_start(self.day.next());
        self.step_day();

        let census = self.census();
        debug!(day = self.day.0, s = census.susceptible, e = census.exposed,
               i = census.infectious, r = census.removed, "census");
        observer.on_census(self.day, &census)
    }

    /// Move, age, then advance one agent.
    fn update_agent(&mut self, agent: AgentId) {
        let i = agent.index();
        let old = self.population.position[i];
        let new = self.draw_destination(old);

        if self.population.compartment[i] == Compartment::Infectious {
            self.grid.relocate(old, new);
        }
        self.population.position[i] = new;
        self.population.time_in_state[i] += 1;

        self.advance_compartment(agent, new);
    }

    /// Uniform target cell.  A draw equal to `current` is redrawn exactly
    /// once; a second collision is accepted.
    fn draw_destination(&mut self, current: Cell) -> Cell {
        let side = self.params.grid_side;
        let x = self.rng.coord(side);
        let y = self.rng.coord(side);
        let first = Cell::new(x, y);
        if first != current {
            return first;
        }
        let x = self.rng.coord(side);
        let y = self.rng.coord(side);
        Cell::new(x, y)
    }

    /// Evaluate the transition rule of the agent's current compartment at
    /// its (already updated) cell.  Every exit goes to `successor()`:
    /// S → E → I → R → S.
    fn advance_compartment(&mut self, agent: AgentId, cell: Cell) {
        let current = self.population.compartment[agent.index()];
        match current {
            Compartment::Susceptible => {
                if self.infection_test(cell) {
                    self.population.enter(agent, current.successor());
                }
            }
            Compartment::Exposed => {
                if self.sojourn_elapsed(agent, current) {
                    self.population.enter(agent, current.successor());
                    self.grid.increment(cell);
                }
            }
            Compartment::Infectious => {
                if self.sojourn_elapsed(agent, current) {
                    self.population.enter(agent, current.successor());
                    self.grid.decrement(cell);
                }
            }
            Compartment::Removed => {
                if self.sojourn_elapsed(agent, current) {
                    self.population.enter(agent, current.successor());
                }
            }
        }
    }

    /// One Bernoulli draw with `p = 1 - exp(-force * NI)`, skipped (no draw)
    /// when the 9-cell density NI is zero.
    fn infection_test(&mut self, cell: Cell) -> bool {
        let ni = self.grid.moore_sum(cell);
        if ni == 0 {
            return false;
        }
        let p = 1.0 - (-self.params.infection_force * ni as f64).exp();
        self.rng.uniform() < p
    }

    /// Strictly more whole days than the agent's fixed threshold.
    #[inline]
    fn sojourn_elapsed(&self, agent: AgentId, compartment: Compartment) -> bool {
        let t = f64::from(self.population.time_in_state[agent.index()]);
        self.population
            .sojourn(agent, compartment)
            .is_some_and(|threshold| t > threshold)
    }
}
