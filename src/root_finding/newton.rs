//! Newton-Raphson iteration with an analytic or numerical derivative.

use super::algorithms::Algorithm;
use super::report::{Exit, RootFindingReport, Stencil};
use super::tolerances::{residual_reached, step_tolerance};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::eval_checked;
use log::trace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Newton;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("starting point must be finite, got x0={x0}")]
    InvalidGuess { x0: f64 },

    #[error("max_step must be positive (infinity allowed), got {step}")]
    InvalidMaxStep { step: f64 },

    /// `x + step` overflowed even though the step itself is finite.
    #[error("x={x} plus step {step} is not a finite number")]
    StepNotFinite { x: f64, step: f64 },

    /// `f'(x)` is zero or subnormal, or `f(x) / f'(x)` overflows.
    #[error("f'({x}) = {dfx} is too small to divide by")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("f'({x}) = {dfx} is not a finite number")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    /// No pair of distinct finite points around `x` exists for a central
    /// difference (only happens next to `±f64::MAX`).
    #[error("cannot place a finite-difference stencil around x={x} (h={h}); supply f' instead")]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 },
}


/// Newton settings: the shared tolerances and `max_iter` (default 50),
/// plus `max_step`, a cap on `|x_{k+1} - x_k|` that is infinite unless set.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    max_step: f64
}
impl Default for NewtonCfg {
    fn default() -> Self {
        Self { common: CommonCfg::default(), max_step: f64::INFINITY }
    }
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Caps the length of each step; `f64::INFINITY` removes the cap.
    pub fn set_max_step(mut self, step: f64) -> Result<Self, NewtonError> {
        if step.is_nan() || step <= 0.0 {
            return Err(NewtonError::InvalidMaxStep { step });
        }
        self.max_step = step;
        Ok(self)
    }

    #[inline] #[must_use] pub fn max_step(&self) -> f64 { self.max_step }
}
impl_common_cfg!(NewtonCfg);


/// `(f(x + h) - f(x - h)) / (2h)` with `h = eps^(1/3) * max(1, |x|)`.
///
/// When `x ± h` overflows or rounds back onto `x`, the adjacent floats
/// `x.next_down()` and `x.next_up()` take their place.
fn central_difference<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    let h = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let (mut lo, mut hi) = (x - h, x + h);
    if !(lo.is_finite() && hi.is_finite()) || lo == x || hi == x {
        (lo, hi) = (x.next_down(), x.next_up());
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let rise = eval_checked(f, hi, evals)? - eval_checked(f, lo, evals)?;
    Ok(rise / (hi - lo))
}


/// Root of `f` by Newton's method, `x_{k+1} = x_k - f(x_k) / f'(x_k)`.
///
/// `df` is the analytic derivative; pass `None` to use a central finite
/// difference instead (two extra evaluations of `f` per step). Every call
/// of `f` or `df` counts toward `evaluations`.
///
/// Each step is clipped to `max_step`. The run stops when
/// - `|f(x)| <= abs_fx`                         : `AbsFxReached`
/// - the step is under the step tolerance       : `StepSizeReached`
/// - `x + step` rounds back to `x`              : `MachinePrecisionReached`
/// - the budget is spent                        : `IterationLimit`
///
/// `stencil` holds the iterate the final step was taken from.
///
/// Convergence is local: a poor `x0` can diverge or cycle. Use a
/// bracketing method when a sign-change interval is known.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`]  : `f'(x)` zero or subnormal, or the step overflows
/// - [`NewtonError::DerivativeNotFinite`] : `f'(x)` NaN or infinite
/// - [`NewtonError::StepNotFinite`]       : `x + step` overflows
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`] : no finite-difference stencil at `x`
/// - [`RootFindingError::NonFiniteEvaluation`] via [`NewtonError::RootFinding`]
/// - [`ToleranceError::InvalidTolerance`] via [`NewtonError::Tolerance`]
pub fn newton<F, G>(
    mut f: F,
    mut df: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let name     = ALGORITHM.name();
    let (abs_fx, abs_x, rel_x) = (cfg.abs_fx(), cfg.abs_x(), cfg.rel_x());
    let max_step = cfg.max_step();
    let budget   = ALGORITHM.iteration_budget(cfg.max_iter(), 0);

    let mut evals = 0;
    let mut curr  = (x0, eval_checked(&mut f, x0, &mut evals)?);
    if residual_reached(curr.1, abs_fx) {
        return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, curr, 0, evals, Stencil::singleton(x0)));
    }

    let mut from = x0;
    for iter in 1..=budget {
        let (x, fx) = curr;
        let dfx = match df.as_mut() {
            Some(df) => { evals += 1; df(x) }
            None     => central_difference(&mut f, x, &mut evals)?,
        };
        if !dfx.is_finite() {
            return Err(NewtonError::DerivativeNotFinite { x, dfx });
        }
        if dfx.abs() < f64::MIN_POSITIVE {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }

        let raw = -fx / dfx;
        if !raw.is_finite() {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }
        let step   = raw.clamp(-max_step, max_step);
        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }
        if x_next == x {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Stalled, curr, iter, evals, Stencil::singleton(x)));
        }

        let next = (x_next, eval_checked(&mut f, x_next, &mut evals)?);
        trace!("[{iter:>5}] {name}: x={x} f={fx} f'={dfx} step={step}");

        if residual_reached(next.1, abs_fx) {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, next, iter, evals, Stencil::singleton(x)));
        }
        if (x_next - x).abs() <= step_tolerance(x, x_next, abs_x, rel_x)? {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Step, next, iter, evals, Stencil::singleton(x)));
        }
        from = x;
        curr = next;
    }

    Ok(RootFindingReport::finish(ALGORITHM, Exit::Exhausted, curr, budget, evals, Stencil::singleton(from)))
}
