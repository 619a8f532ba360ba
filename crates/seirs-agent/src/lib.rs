//! `seirs-agent` — Structure-of-Arrays agent storage for the SEIRS simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `Population` (SoA arrays, one entry per agent)            |
//! | [`builder`]     | `PopulationBuilder` (seeded day-0 construction)           |
//!
//! The population is fixed: agents are created together by the builder and
//! are never added or removed afterwards.

pub mod builder;
pub mod store;


pub use builder::PopulationBuilder;
pub use store::Population;
