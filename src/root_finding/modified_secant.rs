//! Modified secant method: a secant step whose second point is a fixed
//! perturbation `x + dx` of the current iterate.

use super::algorithms::Algorithm;
use super::report::{Exit, RootFindingReport, Stencil};
use super::tolerances::{residual_reached, step_tolerance};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::eval_checked;
use log::trace;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::ModifiedSecant;

#[derive(Debug, Error)]
pub enum ModifiedSecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid perturbation: dx must be finite and non-zero. got {dx}")]
    InvalidPerturbation { dx: f64 },

    #[error("degenerate secant at x={x}: f(x + {dx}) - f(x) is zero")]
    DegenerateSecantStep { x: f64, dx: f64 },
}


/// Modified secant configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
/// - `dx`     : absolute perturbation used for the difference quotient
///              (default [`ModifiedSecantCfg::DEFAULT_DX`]).
#[derive(Debug, Copy, Clone)]
pub struct ModifiedSecantCfg {
    common: CommonCfg,
    dx: f64,
}
impl Default for ModifiedSecantCfg {
    fn default() -> Self {
        Self {
            common: CommonCfg::default(),
            dx: Self::DEFAULT_DX,
        }
    }
}
impl ModifiedSecantCfg {
    pub const DEFAULT_DX: f64 = 1e-6;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_perturbation(mut self, dx: f64) -> Result<Self, ModifiedSecantError> {
        if !dx.is_finite() || dx == 0.0 {
            return Err(ModifiedSecantError::InvalidPerturbation { dx });
        }
        self.dx = dx;
        Ok(self)
    }

    #[inline] #[must_use] pub fn perturbation(&self) -> f64 { self.dx }
}
impl_common_cfg!(ModifiedSecantCfg);


/// Root of `func` from a single starting point, with the slope taken
/// from a fixed perturbation of each iterate:
///
/// x_{k+1} = x_k - f(x_k) * dx / (f(x_k + dx) - f(x_k))
///
/// Two evaluations per iteration. Stopping rules match
/// [`secant`](super::secant::secant); the report's `stencil` holds
/// `{x_k, x_k + dx}` from the last step and `algorithm_name` is
/// `"modified_secant"`.
///
/// # Errors
/// - [`ModifiedSecantError::InvalidGuess`]         : `x0` non-finite
/// - [`ModifiedSecantError::DegenerateSecantStep`] : `f(x + dx) == f(x)`, `x + dx`
///                                                   rounds back to `x`, or the step overflows
/// - [`RootFindingError::NonFiniteEvaluation`] via [`ModifiedSecantError::RootFinding`]
/// - [`ToleranceError::InvalidTolerance`] via [`ModifiedSecantError::Tolerance`]
pub fn modified_secant<F>(
    mut func: F,
    x0: f64,
    cfg: ModifiedSecantCfg
) -> Result<RootFindingReport, ModifiedSecantError>
where F: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(ModifiedSecantError::InvalidGuess { x0 });
    }

    let name   = ALGORITHM.name();
    let (abs_fx, abs_x, rel_x) = (cfg.abs_fx(), cfg.abs_x(), cfg.rel_x());
    let dx     = cfg.perturbation();
    let budget = ALGORITHM.iteration_budget(cfg.max_iter(), 0);

    let mut evals = 0;
    let mut eval  = |x: f64| eval_checked(&mut func, x, &mut evals);

    let mut curr = (x0, eval(x0)?);
    if residual_reached(curr.1, abs_fx) {
        return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, curr, 0, evals, Stencil::singleton(x0)));
    }

    for iter in 1..=budget {
        let (x, fx) = curr;
        let shifted = x + dx;
        if shifted == x {
            return Err(ModifiedSecantError::DegenerateSecantStep { x, dx });
        }
        let rise = eval(shifted)? - fx;
        if rise == 0.0 {
            return Err(ModifiedSecantError::DegenerateSecantStep { x, dx });
        }
        let x_next = x - fx * ((shifted - x) / rise);
        if !x_next.is_finite() {
            return Err(ModifiedSecantError::DegenerateSecantStep { x, dx });
        }

        let next = (x_next, eval(x_next)?);
        trace!("[{iter:>5}] {name}: x={x} f(x)={fx} next x={x_next} f={}", next.1);

        let stencil = Stencil::doubleton(x, shifted);
        if residual_reached(next.1, abs_fx) {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Residual, next, iter, evals, stencil));
        }
        if (x_next - x).abs() <= step_tolerance(x, x_next, abs_x, rel_x)? {
            return Ok(RootFindingReport::finish(ALGORITHM, Exit::Step, next, iter, evals, stencil));
        }
        curr = next;
    }

    let (x, _) = curr;
    Ok(RootFindingReport::finish(ALGORITHM, Exit::Exhausted, curr, budget, evals, Stencil::doubleton(x, x + dx)))
}
