//! Convergence tests.
//!
//! `residual_reached` : `|f(x)| <= abs_fx`, checked by every method
//! `width_tolerance`  : stop threshold for a bracket `[a, b]`
//! `step_tolerance`   : stop threshold for an open-method step `x_k -> x_{k+1}`
//!
//! Width and step thresholds share one shape,
//! `abs_x + rel_x * max(1, |largest point|)`.

use super::errors::ToleranceError;


#[inline]
pub(crate) fn residual_reached(fx: f64, abs_fx: f64) -> bool {
    fx.abs() <= abs_fx
}


fn scaled_tolerance(magnitude: f64, abs_x: f64, rel_x: f64) -> Result<f64, ToleranceError> {
    let tol = abs_x + rel_x * magnitude.max(1.0);
    if tol > 0.0 && tol.is_finite() {
        Ok(tol)
    } else {
        Err(ToleranceError::InvalidTolerance { got: tol })
    }
}

/// Threshold for the width `b - a` of a bracket.
pub(crate) fn width_tolerance(a: f64, b: f64, abs_x: f64, rel_x: f64) -> Result<f64, ToleranceError> {
    scaled_tolerance(a.abs().max(b.abs()), abs_x, rel_x)
}

/// Threshold for `|x_next - x_prev|`, scaled by the larger of the two iterates.
pub(crate) fn step_tolerance(x_prev: f64, x_next: f64, abs_x: f64, rel_x: f64) -> Result<f64, ToleranceError> {
    scaled_tolerance(x_prev.abs().max(x_next.abs()), abs_x, rel_x)
}


/// Halvings that take `[a, b]` down to `width_tol` or below.
///
/// A bracket wider than `f64::MAX` yields `usize::MAX`; callers cap it.
pub(crate) fn halvings_needed(a: f64, b: f64, width_tol: f64) -> Result<usize, ToleranceError> {
    if !(width_tol > 0.0 && width_tol.is_finite()) {
        return Err(ToleranceError::InvalidTolerance { got: width_tol });
    }

    let width = b - a;
    if width <= width_tol {
        return Ok(0);
    }
    let n = (width / width_tol).log2().ceil();
    Ok(if n.is_finite() { n as usize } else { usize::MAX })
}
