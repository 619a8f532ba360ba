//! Trajectory integration with per-step clamping.

use tracing::debug;

use crate::{Method, OdeError, OdeParams, OdeResult, OdeState, step};

/// One output row: time and the clamped state at that time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OdeRow {
    pub t:     f64,
    pub state: OdeState,
}

/// Integrate from `y0` over `[0, days]` with a fixed step `dt`.
///
/// Takes `floor(days / dt)` steps and clamps every component to `[0, 1]`
/// after each one.  The result holds the initial row plus one row per step,
/// with `t = (k + 1) * dt` (never accumulated by repeated addition).
pub fn integrate(
    method: Method,
    y0:     OdeState,
    p:      &OdeParams,
    dt:     f64,
    days:   f64,
) -> OdeResult<Vec<OdeRow>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(OdeError::InvalidStep(dt));
    }
    if !days.is_finite() || days < 0.0 {
        return Err(OdeError::InvalidHorizon(days));
    }

    let steps = (days / dt).floor() as usize;
    debug!(%method, dt, days, steps, "integrating SEIRS system");

    let mut rows = Vec::with_capacity(steps + 1);
    let mut y = y0;
    rows.push(OdeRow { t: 0.0, state: y });

    for k in 0..steps {
        y = step(method, &y, dt, p).map(|v| v.clamp(0.0, 1.0));
        rows.push(OdeRow { t: (k + 1) as f64 * dt, state: y });
    }
    Ok(rows)
}
