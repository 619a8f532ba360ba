//! Simulation observer trait for progress reporting and data collection.

use seirs_core::Day;

use crate::{Census, SimResult};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The fallible hooks abort the run on
/// `Err`: an output sink that cannot write must not silently lose rows.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_census(&mut self, day: Day, census: &Census) -> SimResult<()> {
///         if day.0 % self.interval == 0 {
///             println!("{day}: {} infectious", census.infectious);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the update pass of `day` (days 1..=T).
    fn on_day_start(&mut self, _day: Day) {}

    /// Called with the census of `day`: once for day 0 before any update,
    /// then once after every update pass.
    fn on_census(&mut self, _day: Day, _census: &Census) -> SimResult<()> {
        Ok(())
    }

    /// Called once after the final day completes.
    fn on_sim_end(&mut self, _final_day: Day) -> SimResult<()> {
        Ok(())
    }
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every census row in memory.
#[derive(Debug, Default, Clone)]
pub struct SeriesRecorder {
    pub rows: Vec<(Day, Census)>,
}

impl SeriesRecorder {
    /// Census values only, in day order.
    pub fn censuses(&self) -> Vec<Census> {
        self.rows.iter().map(|&(_, c)| c).collect()
    }
}

impl SimObserver for SeriesRecorder {
    fn on_census(&mut self, day: Day, census: &Census) -> SimResult<()> {
        self.rows.push((day, *census));
        Ok(())
    }
}
