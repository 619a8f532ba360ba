//! Per-day compartment counts (the aggregator).

use seirs_agent::Population;
use seirs_core::Compartment;

/// Number of agents in each compartment at the end of one day.
///
/// `susceptible + exposed + infectious + removed` always equals the
/// population size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infectious:  usize,
    pub removed:     usize,
}

impl Census {
    /// Read-only scan of the population.
    ///
    /// With the `parallel` feature the scan is split across Rayon workers;
    /// the result is identical because counting is order-independent.
    pub fn take(population: &Population) -> Census {
        #[cfg(not(feature = "parallel"))]
        {
            population
                .compartment
                .iter()
                .fold(Census::default(), |mut acc, &c| {
                    acc.add(c);
                    acc
                })
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            population
                .compartment
                .par_iter()
                .fold(Census::default, |mut acc, &c| {
                    acc.add(c);
                    acc
                })
                .reduce(Census::default, Census::merge)
        }
    }

    #[inline]
    fn add(&mut self, compartment: Compartment) {
        match compartment {
            Compartment::Susceptible => self.susceptible += 1,
            Compartment::Exposed     => self.exposed += 1,
            Compartment::Infectious  => self.infectious += 1,
            Compartment::Removed     => self.removed += 1,
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(a: Census, b: Census) -> Census {
        Census {
            susceptible: a.susceptible + b.susceptible,
            exposed:     a.exposed + b.exposed,
            infectious:  a.infectious + b.infectious,
            removed:     a.removed + b.removed,
        }
    }

    /// Count for one compartment.
    pub fn get(&self, compartment: Compartment) -> usize {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Exposed     => self.exposed,
            Compartment::Infectious  => self.infectious,
            Compartment::Removed     => self.removed,
        }
    }

    /// Sum of all four counts.
    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infectious + self.removed
    }
}
