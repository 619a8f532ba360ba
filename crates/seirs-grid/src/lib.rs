//! `seirs-grid` — spatial index of infectious agents on the toroidal grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`density`] | `DensityGrid` — per-cell infectious counts, Moore sums      |
//!
//! # Maintenance model
//!
//! The grid is built once from the day-0 population and then only ever
//! updated incrementally by the day loop:
//!
//! - infectious agent moves        → `relocate(old, new)`
//! - Exposed → Infectious          → `increment(cell)`
//! - Infectious → Removed          → `decrement(cell)`
//!
//! Invariant: `grid.total() == number of Infectious agents` at all times.

pub mod density;

#[cfg(test)]
mod tests;

pub use density::DensityGrid;
