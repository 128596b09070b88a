//! False position (regula falsi) and its endpoint-rescaling variants.

use super::algorithms::Algorithm;
use super::report::{Exit, RootFindingReport, Stencil};
use super::tolerances::{residual_reached, width_tolerance};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::eval_checked;
use super::signs::opposite_sign;
use super::bisection::midpoint;
use log::trace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("f has the same sign at both ends of [{a}, {b}]")]
    NoSignChange  { a: f64, b: f64 },

    #[error("[{a}, {b}] is not a bracket: need finite a < b")]
    InvalidBounds { a: f64, b: f64 },
}

/// How the stale endpoint is treated when the same side of the bracket
/// is replaced twice in a row.
///
/// Pure false position leaves it alone, which lets one endpoint stay fixed
/// for the whole run on convex or concave functions. The other variants
/// shrink the stale endpoint's function value so the next intercept moves
/// toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegulaFalsiVariant {
    Pure,
    /// halve it
    #[default]
    Illinois,
    /// scale by `f_prev / (f_prev + f_new)`
    Pegasus,
    /// scale by `1 - f_new / f_prev`, halving when that is not positive
    AndersonBjorck,
}
impl RegulaFalsiVariant {
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Pure           => Algorithm::RegulaFalsiPure,
            Self::Illinois       => Algorithm::RegulaFalsiIllinois,
            Self::Pegasus        => Algorithm::RegulaFalsiPegasus,
            Self::AndersonBjorck => Algorithm::RegulaFalsiAndersonBjorck,
        }
    }

    /// New function value for the stale endpoint `stale`, given the value
    /// `f_new` at the fresh intercept and `f_prev` at the endpoint it replaced.
    /// `f_new` and `f_prev` share a sign, so neither ratio divides by zero.
    #[inline]
    pub(crate) fn rescale(self, stale: f64, f_new: f64, f_prev: f64) -> f64 {
        match self {
            Self::Pure     => stale,
            Self::Illinois => 0.5 * stale,
            Self::Pegasus  => stale * (f_prev / (f_prev + f_new)),
            Self::AndersonBjorck => {
                let m = 1.0 - f_new / f_prev;
                if m > 0.0 { stale * m } else { 0.5 * stale }
            }
        }
    }
}


/// False position settings: shared tolerances, `max_iter`, and the
/// [`RegulaFalsiVariant`] (Illinois unless changed).
#[derive(Debug, Copy, Clone, Default)]
pub struct RegulaFalsiCfg {
    common:  CommonCfg,
    variant: RegulaFalsiVariant
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_variant(mut self, v: RegulaFalsiVariant) -> Self { self.variant = v; self }

    #[inline] #[must_use] pub fn variant(&self) -> RegulaFalsiVariant { self.variant }
}
impl_common_cfg!(RegulaFalsiCfg);


/// Where the chord through `(a, fa)` and `(b, fb)` crosses zero.
///
/// Written as the weighted mean `a * fb/(fb - fa) + b * (-fa)/(fb - fa)`.
/// With `fa` and `fb` of opposite sign both weights lie in `[0, 1]`, so the
/// result stays finite for any finite bracket. A chord that cannot be
/// formed, or that lands outside `(a, b)`, falls back to the midpoint.
#[inline]
fn chord_root((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    let span = fb - fa;
    let x    = a * (fb / span) + b * (-fa / span);
    if span.is_finite() && span != 0.0 && a < x && x < b { x } else { midpoint(a, b) }
}


/// Root of `func` in `[a, b]` by false position.
///
/// Each step evaluates the chord root `x` of the current bracket and
/// replaces the endpoint whose function value shares the sign of `f(x)`.
/// Input checks and stopping rules match [`bisection`](super::bisection::bisection);
/// the width test reports the chord root of the final bracket. The
/// `algorithm_name` names the variant, e.g. `"regula_falsi_pegasus"`.
///
/// # Errors
/// ┌ [`RegulaFalsiError::InvalidBounds`] : non-finite bound, or `a >= b`
/// ├ [`RegulaFalsiError::NoSignChange`]  : `func(a)` and `func(b)` share a sign
/// ├ [`RootFindingError::NonFiniteEvaluation`] via [`RegulaFalsiError::RootFinding`]
/// └ [`ToleranceError::InvalidTolerance`] via [`RegulaFalsiError::Tolerance`]
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }

    let variant   = cfg.variant();
    let algorithm = variant.algorithm();
    let name      = algorithm.name();
    let (abs_fx, abs_x, rel_x) = (cfg.abs_fx(), cfg.abs_x(), cfg.rel_x());
    let budget    = algorithm.iteration_budget(cfg.max_iter(), 0);

    let mut evals = 0;
    let mut eval  = |x: f64| eval_checked(&mut func, x, &mut evals);

    // fa and fb may be rescaled below; the true values keep the same sign
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    if let Some((x, fx)) = [(a, fa), (b, fb)].into_iter().find(|&(_, fx)| residual_reached(fx, abs_fx)) {
        return Ok(RootFindingReport::finish(algorithm, Exit::Residual, (x, fx), 0, evals, Stencil::bracket(a, b)));
    }
    if !opposite_sign(fa, fb) {
        return Err(RegulaFalsiError::NoSignChange { a, b });
    }

    // side replaced on the previous step: true for b
    let mut moved_b: Option<bool> = None;
    let mut iter = 0;
    let mut last = (a, fa);
    loop {
        if b - a <= width_tolerance(a, b, abs_x, rel_x)? {
            let x = chord_root((a, fa), (b, fb));
            let point = (x, eval(x)?);
            return Ok(RootFindingReport::finish(algorithm, Exit::Width, point, iter, evals, Stencil::bracket(a, b)));
        }
        if iter == budget {
            return Ok(RootFindingReport::finish(algorithm, Exit::Exhausted, last, iter, evals, Stencil::bracket(a, b)));
        }
        iter += 1;

        let x  = chord_root((a, fa), (b, fb));
        let fx = eval(x)?;
        trace!("[{iter:>5}] {name}: [{a}, {b}] f({x})={fx}");
        last = (x, fx);

        if residual_reached(fx, abs_fx) {
            return Ok(RootFindingReport::finish(algorithm, Exit::Residual, last, iter, evals, Stencil::bracket(a, b)));
        }

        let replace_b = opposite_sign(fa, fx);
        if replace_b {
            if moved_b == Some(true) {
                fa = variant.rescale(fa, fx, fb);
            }
            (b, fb) = (x, fx);
        } else {
            if moved_b == Some(false) {
                fb = variant.rescale(fb, fx, fa);
            }
            (a, fa) = (x, fx);
        }
        moved_b = Some(replace_b);
    }
}
