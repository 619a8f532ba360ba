use seirs_core::{Cell, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {agent} starts at {cell}, outside a {side}x{side} grid")]
    PositionOutOfGrid {
        agent: usize,
        cell:  Cell,
        side:  u32,
    },

    #[error("observer failed: {0}")]
    Observer(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl SimError {
    /// Wrap any observer-side failure (e.g. an output sink error).
    pub fn observer<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SimError::Observer(Box::new(err))
    }
}

pub type SimResult<T> = Result<T, SimError>;
