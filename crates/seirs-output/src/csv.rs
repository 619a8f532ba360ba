//! CSV output backend.
//!
//! Three writers share the `csv` crate:
//! - [`CsvWriter`] — integer daily counts, header `t,S,E,I,R`
//! - [`FractionCsvWriter`] — ODE fractions, `t` with 6 decimals and each
//!   compartment with 12
//! - [`PeaksCsvWriter`] — one `rep,day_peak,peak_I` row per replicate

use std::fs::File;
use std::path::Path;

use csv::Writer;
use seirs_ode::OdeRow;

use crate::writer::OutputWriter;
use crate::{DailyRow, OutputResult, PeakRow};

const COUNT_HEADER: [&str; 5] = ["t", "S", "E", "I", "R"];

/// Writes daily counts to a single CSV file.
pub struct CsvWriter {
    daily:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut daily = Writer::from_path(path)?;
        daily.write_record(COUNT_HEADER)?;
        Ok(Self { daily, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_daily(&mut self, row: &DailyRow) -> OutputResult<()> {
        self.daily.write_record(&[
            row.t.to_string(),
            row.s.to_string(),
            row.e.to_string(),
            row.i.to_string(),
            row.r.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.daily.flush()?;
        Ok(())
    }
}

/// Writes an ODE trajectory as fixed-precision fractions.
pub struct FractionCsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl FractionCsvWriter {
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record(COUNT_HEADER)?;
        Ok(Self { rows, finished: false })
    }

    pub fn write_row(&mut self, row: &OdeRow) -> OutputResult<()> {
        let [s, e, i, r] = row.state;
        self.rows.write_record(&[
            format!("{:.6}", row.t),
            format!("{s:.12}"),
            format!("{e:.12}"),
            format!("{i:.12}"),
            format!("{r:.12}"),
        ])?;
        Ok(())
    }

    /// Write every row, then flush.
    pub fn write_all(&mut self, rows: &[OdeRow]) -> OutputResult<()> {
        for row in rows {
            self.write_row(row)?;
        }
        self.finish()
    }

    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

/// Writes the first-peak summary of a replicate batch.
pub struct PeaksCsvWriter {
    peaks:    Writer<File>,
    finished: bool,
}

impl PeaksCsvWriter {
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut peaks = Writer::from_path(path)?;
        peaks.write_record(["rep", "day_peak", "peak_I"])?;
        Ok(Self { peaks, finished: false })
    }

    pub fn write_peak(&mut self, row: &PeakRow) -> OutputResult<()> {
        self.peaks.write_record(&[
            row.rep.clone(),
            row.day_peak.to_string(),
            row.peak_i.to_string(),
        ])?;
        Ok(())
    }

    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.peaks.flush()?;
        Ok(())
    }
}
