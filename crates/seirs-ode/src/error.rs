use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("horizon must be finite and non-negative, got {0}")]
    InvalidHorizon(f64),

    #[error("unknown integration method {0:?} (expected \"euler\" or \"rk4\")")]
    UnknownMethod(String),
}

pub type OdeResult<T> = Result<T, OdeError>;
