//! Fixed-step integrators.

use std::fmt;
use std::str::FromStr;

use crate::{OdeError, OdeParams, OdeState, rhs};

/// Explicit one-step scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    Euler,
    Rk4,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Euler, Method::Rk4];

    /// Lower-case name, also used for output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Rk4   => "rk4",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = OdeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk4"   => Ok(Method::Rk4),
            _       => Err(OdeError::UnknownMethod(s.to_owned())),
        }
    }
}

/// Advance `y` by one step of length `dt` (no clamping).
pub fn step(method: Method, y: &OdeState, dt: f64, p: &OdeParams) -> OdeState {
    match method {
        Method::Euler => {
            let k = rhs(y, p);
            std::array::from_fn(|i| y[i] + dt * k[i])
        }
        Method::Rk4 => {
            let k1 = rhs(y, p);
            let k2 = rhs(&offset(y, &k1, 0.5 * dt), p);
            let k3 = rhs(&offset(y, &k2, 0.5 * dt), p);
            let k4 = rhs(&offset(y, &k3, dt), p);
            std::array::from_fn(|i| {
                y[i] + (dt / 6.0) * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i])
            })
        }
    }
}

#[inline]
fn offset(y: &OdeState, k: &OdeState, h: f64) -> OdeState {
    std::array::from_fn(|i| y[i] + h * k[i])
}
