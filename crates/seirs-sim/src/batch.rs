//! Independent replicate runs over a list of seeds.
//!
//! Each replicate owns its own `Sim` and `SimRng`; replicates share no
//! mutable state, so with the `parallel` feature they run on Rayon's pool.
//! Results come back in seed order and are identical either way.

use seirs_core::{Day, SimParams};
use tracing::info;

use crate::{Census, Peak, SeriesRecorder, SimBuilder, SimResult, first_local_peak};

/// The full census series of one seed.
#[derive(Debug, Clone)]
pub struct Replicate {
    pub seed:   u64,
    pub series: Vec<(Day, Census)>,
}

impl Replicate {
    /// First epidemic peak of this replicate's infectious curve.
    pub fn peak(&self) -> Option<Peak> {
        first_local_peak(&self.series)
    }
}

/// Run `params` once per seed (every other field unchanged).
///
/// The configuration is validated once up front; the first failing
/// replicate's error is returned.
pub fn run_replicates(params: &SimParams, seeds: &[u64]) -> SimResult<Vec<Replicate>> {
    params.validate()?;
    info!(replicates = seeds.len(), agents = params.agent_count, "running replicate batch");

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(params, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(params, seed)).collect()
    }
}

fn run_one(params: &SimParams, seed: u64) -> SimResult<Replicate> {
    let mut sim = SimBuilder::new(params.with_seed(seed)).build()?;
    let mut recorder = SeriesRecorder::default();
    sim.run(&mut recorder)?;
    Ok(Replicate { seed, series: recorder.rows })
}
