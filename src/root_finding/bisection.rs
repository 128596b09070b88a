//! Bisection: halve a sign-change bracket until `f` or the bracket is small enough.

use super::algorithms::Algorithm;
use super::report::{Exit, RootFindingReport, Stencil};
use super::tolerances::{halvings_needed, residual_reached, width_tolerance};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::eval_checked;
use super::signs::opposite_sign;
use log::trace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("f has the same sign at both ends of [{a}, {b}]")]
    NoSignChange  { a: f64, b: f64 },

    #[error("[{a}, {b}] is not a bracket: need finite a < b")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection settings: only the shared tolerances and `max_iter`.
///
/// Left unset, `max_iter` becomes the number of halvings that bring the
/// starting bracket under its width tolerance, at most
/// [`ITERATION_CEILING`](super::algorithms::ITERATION_CEILING).
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(BisectionCfg);


/// Centre of `[a, b]` for any finite `a` and `b`.
///
/// With both ends on one side of zero `b - a` cannot overflow; across
/// zero the halves are summed instead, since `b - a` may exceed `f64::MAX`.
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    if (a < 0.0) == (b < 0.0) {
        a + (b - a) * 0.5
    } else {
        0.5 * a + 0.5 * b
    }
}


/// Root of `func` in `[a, b]` by repeated halving.
///
/// `func` must be continuous with `func(a)` and `func(b)` of opposite
/// sign. The midpoint is evaluated each step and the half that still
/// changes sign is kept, so the bracket shrinks by exactly one half per
/// iteration.
///
/// Stops when
/// ┌ an endpoint or midpoint has `|f| <= abs_fx`   (`AbsFxReached`)
/// ├ `b - a` drops under the width tolerance        (`WidthTolReached`, reports
/// │                                                  the midpoint of the final bracket)
/// └ the iteration budget runs out                  (`IterationLimit`)
///
/// The report's `stencil` holds the final bracket.
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`] : non-finite bound, or `a >= b` (zero width included)
/// ├ [`BisectionError::NoSignChange`]  : `func(a)` and `func(b)` share a sign
/// ├ [`RootFindingError::NonFiniteEvaluation`] via [`BisectionError::RootFinding`]
/// └ [`ToleranceError::InvalidTolerance`] via [`BisectionError::Tolerance`]
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let (abs_fx, abs_x, rel_x) = (cfg.abs_fx(), cfg.abs_x(), cfg.rel_x());
    let name   = ALGORITHM.name();
    let budget = ALGORITHM.iteration_budget(
        cfg.max_iter(),
        halvings_needed(a, b, width_tolerance(a, b, abs_x, rel_x)?)?,
    );

    let mut evals = 0;
    let mut eval  = |x: f64| eval_checked(&mut func, x, &mut evals);

    let mut fa = eval(a)?;
    let fb     = eval(b)?;
    if let Some((x, fx)) = [(a, fa), (b, fb)].into_iter().find(|&(_, fx)| residual_reached(fx, abs_fx)) {
        return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, (x, fx), 0, evals, Stencil::bracket(a, b)));
    }
    if !opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut iter = 0;
    let mut last = (a, fa);
    loop {
        if b - a <= width_tolerance(a, b, abs_x, rel_x)? {
            let m = midpoint(a, b);
            let point = (m, eval(m)?);
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Width, point, iter, evals, Stencil::bracket(a, b)));
        }
        if iter == budget {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Exhausted, last, iter, evals, Stencil::bracket(a, b)));
        }
        iter += 1;

        let m  = midpoint(a, b);
        let fm = eval(m)?;
        trace!("[{iter:>5}] {name}: [{a}, {b}] f({m})={fm}");
        last = (m, fm);

        if residual_reached(fm, abs_fx) {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, last, iter, evals, Stencil::bracket(a, b)));
        }
        if opposite_sign(fa, fm) {
            b = m;
        } else {
            (a, fa) = (m, fm);
        }
    }
}
