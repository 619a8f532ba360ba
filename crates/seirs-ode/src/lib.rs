//! `seirs-ode` — the mean-field SEIRS model on population fractions.
//!
//! ```text
//! dS/dt = ρR − βSI
//! dE/dt = βSI − σE
//! dI/dt = σE − γI
//! dR/dt = γI − ρR
//! ```
//!
//! Integrated with a fixed step by forward Euler or classical RK4; every
//! component is clamped to `[0, 1]` after each step.
//!
//! | Module        | Contents                                  |
//! |---------------|-------------------------------------------|
//! | [`model`]     | `OdeParams`, `OdeState`, `rhs`            |
//! | [`method`]    | `Method`, single-step `step`              |
//! | [`integrate`] | `integrate`, `OdeRow`                     |
//! | [`error`]     | `OdeError`, `OdeResult`                   |

pub mod error;
pub mod integrate;
pub mod method;
pub mod model;


pub use error::{OdeError, OdeResult};
pub use integrate::{OdeRow, integrate};
pub use method::{Method, step};
pub use model::{DEFAULT_INITIAL, OdeParams, OdeState, rhs};
