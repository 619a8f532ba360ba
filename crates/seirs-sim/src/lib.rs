//! `seirs-sim` — daily update loop for the SEIRS agent simulation.
//!
//! # One simulated day
//!
//! ```text
//! for day in 1..=params.days:
//!   ① Order   — reshuffle the processing order in place.
//!   ② Update  — for each agent in that order, sequentially:
//!                 move     — uniform target cell, one retry on collision
//!                 density  — relocate in DensityGrid if Infectious
//!                 clock    — time_in_state += 1
//!                 advance  — S: infection test on the 9-cell Moore sum
//!                            E/I/R: exit when time_in_state > duration
//!   ③ Census  — count S/E/I/R and hand the row to the observer.
//! ```
//!
//! Day 0 is reported before any update.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Replicates and the census scan run on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seirs_core::SimParams;
//! use seirs_sim::{SeriesRecorder, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimParams::default()).build()?;
//! let mut recorder = SeriesRecorder::default();
//! sim.run(&mut recorder)?;
//! ```

pub mod batch;
pub mod builder;
pub mod census;
pub mod error;
pub mod observer;
pub mod peaks;
pub mod sim;


pub use batch::{Replicate, run_replicates};
pub use builder::SimBuilder;
pub use census::Census;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SeriesRecorder, SimObserver};
pub use peaks::{Peak, PeakStats, first_local_peak};
pub use sim::Sim;
