//! Model parameters and the right-hand side.

/// Fractions `[S, E, I, R]` of the population.
pub type OdeState = [f64; 4];

/// 0.1 % infectious, everyone else susceptible.
pub const DEFAULT_INITIAL: OdeState = [0.999, 0.0, 0.001, 0.0];

/// Per-day rates of the SEIRS system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OdeParams {
    /// Loss of immunity, R → S.
    pub rho: f64,
    /// Transmission, S → E.
    pub beta: f64,
    /// Incubation exit, E → I.
    pub sigma: f64,
    /// Recovery, I → R.
    pub gamma: f64,
}

impl Default for OdeParams {
    fn default() -> Self {
        Self {
            rho:   1.0 / 365.0,
            beta:  0.5,
            sigma: 1.0 / 3.0,
            gamma: 1.0 / 7.0,
        }
    }
}

/// Time derivative of `y`.  The four components always sum to zero.
#[inline]
pub fn rhs(y: &OdeState, p: &OdeParams) -> OdeState {
    let [s, e, i, r] = *y;
    let infection = p.beta * s * i;
    [
        p.rho * r - infection,
        infection - p.sigma * e,
        p.sigma * e - p.gamma * i,
        p.gamma * i - p.rho * r,
    ]
}
