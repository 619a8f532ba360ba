//! Core error type.
//!
//! Only configuration problems live here: no movement or transition outcome
//! is ever an error.  Sub-crates wrap `CoreError` as one variant of their own
//! enums via `From`.

use thiserror::Error;

/// Errors raised while validating a run configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("initial compartment counts sum to {got}, expected agent count {expected}")]
    InitialCountMismatch { expected: usize, got: usize },
}

/// Shorthand result type for all `seirs-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
