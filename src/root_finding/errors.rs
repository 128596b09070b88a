//! Errors shared by every solver.
//!
//! Each method has its own error enum for input it rejects; these two are
//! wrapped into all of them with `#[error(transparent)]`.
//!
//! ┌ [`RootFindingError`] : evaluation failures, iteration budget, strict non-convergence
//! └ [`ToleranceError`]   : bad tolerance settings and unusable derived tolerances

use thiserror::Error;


#[derive(Debug, Error)]
pub enum RootFindingError {
    /// `f(x)` was NaN or infinite, typically a domain error such as `sqrt(-1)`.
    #[error("f({x}) = {fx} is not a finite number")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("max_iter must be at least 1, got {got}")]
    InvalidMaxIter { got: usize },

    /// Returned by [`RootFindingReport::into_converged`](super::report::RootFindingReport::into_converged).
    #[error("{algorithm} did not converge after {iterations} iterations: last x={x}, f(x)={fx}")]
    NotConverged { algorithm: &'static str, x: f64, fx: f64, iterations: usize },
}


#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("abs_fx must be finite and positive, got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("abs_x must be finite and non-negative, got {got}")]
    InvalidAbsX { got: f64 },

    #[error("rel_x must be finite and non-negative, got {got}")]
    InvalidRelX { got: f64 },

    #[error("abs_x and rel_x cannot both be zero (abs_x={abs_x}, rel_x={rel_x})")]
    InvalidAbsRelX { abs_x: f64, rel_x: f64 },

    /// The width or step tolerance derived from `abs_x`, `rel_x` and the
    /// current iterates came out non-positive or non-finite.
    #[error("derived tolerance {got} is unusable")]
    InvalidTolerance { got: f64 },
}
