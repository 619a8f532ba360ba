//! `seirs-output` — file writers for SEIRS results.
//!
//! Daily counts of the agent simulation go through one of three backends:
//!
//! | Feature   | Backend  | Layout                                             |
//! |-----------|----------|----------------------------------------------------|
//! | *(none)*  | CSV      | header `t,S,E,I,R`, one integer row per day        |
//! | `sqlite`  | SQLite   | table `daily_counts(t PRIMARY KEY, S, E, I, R)`    |
//! | `parquet` | Parquet  | columns `t: UInt32`, `S/E/I/R: UInt64`             |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `seirs_sim::SimObserver`.
//!
//! Two further CSV writers cover the companion outputs: [`FractionCsvWriter`]
//! for ODE trajectories and [`PeaksCsvWriter`] for per-replicate peaks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seirs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::create(Path::new("data/ma_seirs.csv"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use crate::csv::{CsvWriter, FractionCsvWriter, PeaksCsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DailyRow, PeakRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetWriter;
