//! Fluent builder for constructing a [`Sim`].

use seirs_agent::{Population, PopulationBuilder};
use seirs_core::{AgentId, Compartment, Day, SimParams, SimRng};
use seirs_grid::DensityGrid;
use tracing::{info, warn};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimParams`] — grid, population, days, seed, quotas, means, force.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.population(p)`  | Drawn by `PopulationBuilder` from the run's RNG  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    params:     SimParams,
    population: Option<Population>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(params: SimParams) -> Self {
        Self { params, population: None }
    }

    /// Supply a hand-made day-0 population instead of drawing one.
    ///
    /// Must hold `params.agent_count` agents, all inside the grid.  No
    /// initialisation draws are taken from the RNG in that case; the daily
    /// loop still uses the stream seeded with `params.seed`.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate inputs, draw (or check) the population, build the density
    /// grid, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        // ── Reject bad configurations before allocating agents ────────────
        self.params.validate()?;

        let mut rng = SimRng::new(self.params.seed);
        let side = self.params.grid_side;

        let population = match self.population {
            Some(p) => {
                check_population(&p, &self.params)?;
                p
            }
            None => PopulationBuilder::from_params(&self.params).build(&mut rng)?,
        };

        let grid = DensityGrid::from_agents(side, &population.compartment, &population.position);

        if grid.is_clear() && population.count_in(Compartment::Exposed) == 0 {
            warn!(
                seed = self.params.seed,
                "no exposed or infectious agents at day 0; the epidemic cannot start"
            );
        }
        info!(
            seed    = self.params.seed,
            agents  = population.count,
            grid    = side,
            days    = self.params.days,
            initial_infectious = grid.total(),
            "simulation built"
        );

        let order = population.agent_ids().collect::<Vec<AgentId>>();

        Ok(Sim {
            params: self.params,
            day: Day::ZERO,
            population,
            grid,
            rng,
            order,
            initial_reported: false,
        })
    }
}

fn check_population(population: &Population, params: &SimParams) -> SimResult<()> {
    let expected = params.agent_count;
    let lengths = [
        (population.count, "population"),
        (population.compartment.len(), "compartments"),
        (population.time_in_state.len(), "time-in-state"),
        (population.position.len(), "positions"),
        (population.duration_exposed.len(), "exposed durations"),
        (population.duration_infectious.len(), "infectious durations"),
        (population.duration_removed.len(), "removed durations"),
    ];
    for (got, what) in lengths {
        if got != expected {
            return Err(SimError::AgentCountMismatch { expected, got, what });
        }
    }

    let side = params.grid_side;
    if let Some((agent, &cell)) = population
        .position
        .iter()
        .enumerate()
        .find(|(_, c)| c.x >= side || c.y >= side)
    {
        return Err(SimError::PositionOutOfGrid { agent, cell, side });
    }
    Ok(())
}
