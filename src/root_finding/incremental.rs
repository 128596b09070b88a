//! Incremental search for sign-change brackets.
//!
//! Walks `[lb, ub]` in fixed increments and records every sub-interval on
//! which `f` changes sign. The resulting [`Bracket`]s are ready to hand to a
//! bracketing method, and their midpoints or endpoints make reasonable
//! starting guesses for the open methods.

use super::eval::eval_checked;
use super::bisection::midpoint;
use super::errors::RootFindingError;
use super::signs::strict_sign_change;
use log::{debug, trace};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum IncrementalSearchError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid bounds: lb and ub must be finite with lb <= ub. got [{lb}, {ub}]")]
    InvalidBounds { lb: f64, ub: f64 },

    #[error("invalid increment: must be finite and > 0. got {increment}")]
    InvalidIncrement { increment: f64 },
}


/// An interval expected to contain one root.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bracket {
    pub left  : f64,
    pub right : f64,
}
impl Bracket {
    pub fn midpoint(&self) -> f64 {
        midpoint(self.left, self.right)
    }
}


/// Locates sub-intervals of `[lb, ub]` where `func` changes sign.
///
/// Samples `x_i = lb + i * increment` for every `x_i <= ub` and records
/// - `[x_i, x_i + increment]` when `f(x_i) * f(x_i + increment) < 0`
/// - `[x_i - increment, x_i + increment]` when `f(x_i) == 0` exactly
///
/// The number of roots found is the length of the returned vector. Roots
/// closer together than `increment`, or of even multiplicity, can be missed.
///
/// # Errors
/// - [`IncrementalSearchError::InvalidBounds`]    : non-finite bounds or `lb > ub`
/// - [`IncrementalSearchError::InvalidIncrement`] : `increment` non-finite or <= 0
/// - [`RootFindingError::NonFiniteEvaluation`] via [`IncrementalSearchError::RootFinding`]
pub fn incremental_search<F>(
    mut func: F,
    lb: f64,
    ub: f64,
    increment: f64,
) -> Result<Vec<Bracket>, IncrementalSearchError>
where F: FnMut(f64) -> f64 {

    if !(lb.is_finite() && ub.is_finite()) || lb > ub {
        return Err(IncrementalSearchError::InvalidBounds { lb, ub });
    }
    if !increment.is_finite() || increment <= 0.0 {
        return Err(IncrementalSearchError::InvalidIncrement { increment });
    }

    let mut evals = 0;
    let mut eval  = |x: f64| eval_checked(&mut func, x, &mut evals);

    let mut brackets = Vec::new();
    let mut x  = lb;
    let mut fx = eval(x)?;
    let mut i: u64 = 0;
    while x <= ub {
        // multiply rather than accumulate so rounding does not drift
        let x_next = lb + (i + 1) as f64 * increment;
        let f_next = eval(x_next)?;

        if fx == 0.0 {
            trace!("incremental_search: exact root at x={x}");
            brackets.push(Bracket { left: x - increment, right: x + increment });
        }
        if strict_sign_change(fx, f_next) {
            trace!("incremental_search: sign change on [{x}, {x_next}]");
            brackets.push(Bracket { left: x, right: x_next });
        }

        x  = x_next;
        fx = f_next;
        i += 1;
    }

    debug!("incremental_search: {} bracket(s) on [{lb}, {ub}] with step {increment}", brackets.len());
    Ok(brackets)
}
