//! The `OutputWriter` trait implemented by all daily-count backends.

use crate::{DailyRow, OutputResult};

/// Trait implemented by the CSV, SQLite, and Parquet writers.
pub trait OutputWriter {
    /// Write one day's counts.
    fn write_daily(&mut self, row: &DailyRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
