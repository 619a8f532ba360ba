//! Failures of the result sinks: daily-count files (CSV, SQLite, Parquet),
//! ODE fraction CSVs and replicate peak CSVs.
//!
//! Any of these reaching `SimOutputObserver` stops the run as
//! `SimError::Observer`; a daily row is never dropped silently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination file could not be created or written.
    #[error("cannot write output file: {0}")]
    Io(#[from] std::io::Error),

    /// Daily counts, ODE fractions or peaks rejected by the CSV encoder.
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("daily_counts table write failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("building the daily-count record batch failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet daily-count file failed: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type OutputResult<T> = Result<T, OutputError>;
