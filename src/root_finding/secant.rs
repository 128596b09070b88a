//! Secant method: Newton's update with the derivative replaced by the
//! slope through the two latest iterates.

use super::algorithms::Algorithm;
use super::report::{Exit, RootFindingReport, Stencil};
use super::tolerances::{residual_reached, step_tolerance};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::eval_checked;
use log::trace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Secant;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("starting points must be finite and distinct, got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    /// The two latest iterates have equal function values, so the secant
    /// line has no zero crossing (or the step through it overflowed).
    #[error("secant through x={x0} and x={x1} is flat (f={fx})")]
    DegenerateSecantStep { x0: f64, x1: f64, fx: f64 },
}


/// Secant settings: the shared tolerances and `max_iter` (default 100).
#[derive(Debug, Copy, Clone, Default)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(SecantCfg);


/// Next secant iterate from `(x_prev, f_prev)` and `(x_curr, f_curr)`.
///
/// `None` when the function values are equal or the step is not finite.
/// Only the difference is tested, never its size against `|f|`: a function
/// whose values are all tiny still has a well-defined secant step.
#[inline]
pub(crate) fn secant_step((x_prev, f_prev): (f64, f64), (x_curr, f_curr): (f64, f64)) -> Option<f64> {
    let df = f_curr - f_prev;
    if df == 0.0 {
        return None;
    }
    let x_next = x_curr - f_curr * ((x_curr - x_prev) / df);
    x_next.is_finite().then_some(x_next)
}


/// Root of `func` by the secant method from two starting points.
///
/// x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
///
/// Converges superlinearly near a simple root but, like Newton, only
/// locally. Stops on `|f| <= abs_fx`, on a step under the step tolerance,
/// or when the budget runs out. The report's `stencil` holds the two
/// iterates the last step was drawn through.
///
/// # Errors
/// - [`SecantError::InvalidGuess`]         : `x0` or `x1` non-finite, or `x0 == x1`
/// - [`SecantError::DegenerateSecantStep`] : `f(x_k) == f(x_{k-1})` for the two latest iterates
/// - [`RootFindingError::NonFiniteEvaluation`] via [`SecantError::RootFinding`]
/// - [`ToleranceError::InvalidTolerance`] via [`SecantError::Tolerance`]
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let name   = ALGORITHM.name();
    let (abs_fx, abs_x, rel_x) = (cfg.abs_fx(), cfg.abs_x(), cfg.rel_x());
    let budget = ALGORITHM.iteration_budget(cfg.max_iter(), 0);

    let mut evals = 0;
    let mut eval  = |x: f64| eval_checked(&mut func, x, &mut evals);

    let mut prev = (x0, eval(x0)?);
    let mut curr = (x1, eval(x1)?);
    if let Some(hit) = [prev, curr].into_iter().find(|&(_, fx)| residual_reached(fx, abs_fx)) {
        return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, hit, 0, evals, Stencil::singleton(hit.0)));
    }
    if (x1 - x0).abs() <= step_tolerance(x0, x1, abs_x, rel_x)? {
        return Ok(RootFindingReport::finish(ALGORITHM, Exit::Step, curr, 0, evals, Stencil::doubleton(x0, x1)));
    }

    for iter in 1..=budget {
        let x_next = secant_step(prev, curr).ok_or(SecantError::DegenerateSecantStep {
            x0: prev.0,
            x1: curr.0,
            fx: curr.1,
        })?;
        let next = (x_next, eval(x_next)?);
        trace!("[{iter:>5}] {name}: through x={} and x={}, next x={x_next} f={}", prev.0, curr.0, next.1);

        let stencil = Stencil::doubleton(prev.0, curr.0);
        if residual_reached(next.1, abs_fx) {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, next, iter, evals, stencil));
        }
        if (x_next - curr.0).abs() <= step_tolerance(curr.0, x_next, abs_x, rel_x)? {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Step, next, iter, evals, stencil));
        }

        (prev, curr) = (curr, next);
    }

    Ok(RootFindingReport::finish(ALGORITHM, Exit::Exhausted, curr, budget, evals, Stencil::doubleton(prev.0, curr.0)))
}
