//! Settings every solver shares.
//!
//! [`CommonCfg`] holds
//! ┌ `abs_fx`   : stop once `|f(x)| <= abs_fx`
//! ├ `abs_x`    : absolute part of the width / step threshold
//! ├ `rel_x`    : relative part, scaled by the size of the iterates
//! └ `max_iter` : iteration budget, `None` for the method's default
//!
//! Each method's config embeds one as `common` and receives the builder
//! setters from [`impl_common_cfg`]. Setters reject bad values up front,
//! so any config a caller holds is valid.

use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_ABS_FX : f64 = 1e-12;
pub const DEFAULT_ABS_X  : f64 = 0.0;
pub const DEFAULT_REL_X  : f64 = 4.0 * f64::EPSILON;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    abs_fx   : f64,
    abs_x    : f64,
    rel_x    : f64,
    max_iter : Option<usize>,
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self { abs_fx: DEFAULT_ABS_FX, abs_x: DEFAULT_ABS_X, rel_x: DEFAULT_REL_X, max_iter: None }
    }
}

/// `Some(v)` when `v` is a finite number that is not negative.
fn non_negative(v: f64) -> Option<f64> {
    (v.is_finite() && v >= 0.0).then_some(v)
}

impl CommonCfg {
    #[inline] pub fn abs_fx(&self) -> f64 { self.abs_fx }
    #[inline] pub fn abs_x(&self)  -> f64 { self.abs_x }
    #[inline] pub fn rel_x(&self)  -> f64 { self.rel_x }
    #[inline] pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    pub(crate) fn try_abs_fx(&mut self, v: f64) -> Result<(), ToleranceError> {
        self.abs_fx = non_negative(v)
            .filter(|&v| v > 0.0)
            .ok_or(ToleranceError::InvalidAbsFx { got: v })?;
        Ok(())
    }

    /// Zero is allowed while `rel_x` stays positive.
    pub(crate) fn try_abs_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        let v = non_negative(v).ok_or(ToleranceError::InvalidAbsX { got: v })?;
        self.set_x_pair(v, self.rel_x)
    }

    /// Zero is allowed while `abs_x` stays positive.
    pub(crate) fn try_rel_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        let v = non_negative(v).ok_or(ToleranceError::InvalidRelX { got: v })?;
        self.set_x_pair(self.abs_x, v)
    }

    fn set_x_pair(&mut self, abs_x: f64, rel_x: f64) -> Result<(), ToleranceError> {
        if abs_x == 0.0 && rel_x == 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x, rel_x });
        }
        (self.abs_x, self.rel_x) = (abs_x, rel_x);
        Ok(())
    }

    pub(crate) fn try_max_iter(&mut self, v: usize) -> Result<(), RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(())
    }
}

/// Adds `set_abs_fx`, `set_abs_x`, `set_rel_x`, `set_max_iter` and the
/// matching getters to a config struct with a `common: CommonCfg` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_abs_fx(mut self, v: f64) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_fx(v).map(|()| self)
            }
            pub fn set_abs_x(mut self, v: f64) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_x(v).map(|()| self)
            }
            pub fn set_rel_x(mut self, v: f64) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_rel_x(v).map(|()| self)
            }
            pub fn set_max_iter(mut self, v: usize) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common.try_max_iter(v).map(|()| self)
            }

            #[inline] #[must_use] pub fn abs_fx(&self) -> f64 { self.common.abs_fx() }
            #[inline] #[must_use] pub fn abs_x(&self)  -> f64 { self.common.abs_x() }
            #[inline] #[must_use] pub fn rel_x(&self)  -> f64 { self.common.rel_x() }
            #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
