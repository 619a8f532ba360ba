//! `seirs-core` — foundational types for the SEIRS agent simulation.
//!
//! This crate is a dependency of every other `seirs-*` crate.  It has no
//! `seirs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`ids`]           | `AgentId`                                             |
//! | [`cell`]          | `Cell`, toroidal wrap, Moore neighbourhood            |
//! | [`compartment`]   | `Compartment` (S/E/I/R)                               |
//! | [`time`]          | `Day`                                                 |
//! | [`params`]        | `SimParams`, `InitialCounts`, `MeanDurations`         |
//! | [`rng`]           | `SimRng` (the single per-run random stream)           |
//! | [`error`]         | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the parameter types.     |

pub mod cell;
pub mod compartment;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, MOORE_OFFSETS};
pub use compartment::Compartment;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use params::{InitialCounts, MeanDurations, SimParams};
pub use rng::SimRng;
pub use time::Day;
