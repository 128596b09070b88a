//! Checked function evaluation shared by every method.

use super::errors::RootFindingError;


/// Evaluates `f(x)`, counting the call in `evals`.
///
/// Domain errors surface in `f64` arithmetic as NaN or infinity
/// (e.g. `sqrt(-1)`, `ln(0)`); both become
/// [`RootFindingError::NonFiniteEvaluation`].
#[inline]
pub(crate) fn eval_checked<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, RootFindingError> where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}
