//! Sign utilities for root-finding algorithms.
//! - `opposite_sign`      : `true` if values have opposite sign bits
//! - `strict_sign_change` : `true` if `x * y < 0`, i.e. neither value is zero

/// Returns `true` if `x` and `y` have opposite signs.
///
/// Zero counts by its sign bit, so callers check the residual
/// tolerance before relying on this.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `x` and `y` are both non-zero with opposite signs.
#[inline]
pub(crate) fn strict_sign_change(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && opposite_sign(x, y)
}
