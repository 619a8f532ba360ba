//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use seirs_core::Day;
use seirs_sim::{Census, SimError, SimObserver, SimResult};
use tracing::debug;

use crate::row::DailyRow;
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes every daily census to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet).
///
/// A failed write is returned to the simulation as
/// [`SimError::Observer`], which stops the run.  The writer is finished in
/// `on_sim_end`.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:  W,
    written: usize,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of daily rows written so far.
    pub fn rows_written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to finish it after an aborted run).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_census(&mut self, day: Day, census: &Census) -> SimResult<()> {
        self.writer
            .write_daily(&DailyRow::new(day, census))
            .map_err(SimError::observer)?;
        self.written += 1;
        Ok(())
    }

    fn on_sim_end(&mut self, final_day: Day) -> SimResult<()> {
        debug!(rows = self.written, %final_day, "closing output");
        self.writer.finish().map_err(SimError::observer)
    }
}
