//! [`RootFindingReport`]: what every solver hands back on success,
//! plus its one-line `Display` summary.

use std::fmt;

use log::debug;

use super::algorithms::Algorithm;
use super::errors::RootFindingError;


/// Why a solver stopped.
///
/// Only [`TerminationReason::IterationLimit`] means the estimate is not
/// trusted; see [`RootFindingReport::into_converged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    MachinePrecisionReached,
}


/// The stopping test that fired.
///
/// ┌ `AbsFxReached`        : `|f(root)| <= abs_fx`
/// ├ `WidthTolReached`     : bracket width under its threshold (bracketing methods)
/// ├ `StepSizeReached`     : last step under its threshold (open methods)
/// └ `ToleranceNotReached` : none did; paired with `IterationLimit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Points the last update was computed from.
///
/// Bracketing methods report the final `[a, b]`; open methods report one
/// or two iterates (Newton keeps one, the secant methods two).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Self::Bracket { bounds } => bounds,
            Self::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Self::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Self::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Self::Open { x: [x1, x2], len: 2 }
    }
}


/// How a solver run ended; collapses onto the public
/// ([`TerminationReason`], [`ToleranceSatisfied`]) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    Residual,
    Width,
    Step,
    Stalled,
    Exhausted,
}
impl Exit {
    fn outcome(self) -> (TerminationReason, ToleranceSatisfied) {
        use TerminationReason as R;
        use ToleranceSatisfied as T;
        match self {
            Exit::Residual  => (R::ToleranceReached, T::AbsFxReached),
            Exit::Width     => (R::ToleranceReached, T::WidthTolReached),
            Exit::Step      => (R::ToleranceReached, T::StepSizeReached),
            Exit::Stalled   => (R::MachinePrecisionReached, T::StepSizeReached),
            Exit::Exhausted => (R::IterationLimit, T::ToleranceNotReached),
        }
    }
}


/// Outcome of a successful call.
///
/// `root` is the best estimate, or the last iterate when
/// `termination_reason` is `IterationLimit`. `evaluations` counts calls
/// of `f` and, for Newton, of the derivative.
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// Assembles a report and logs how the run ended.
    pub(crate) fn finish(
        algorithm   : Algorithm,
        exit        : Exit,
        (root, f_root): (f64, f64),
        iterations  : usize,
        evaluations : usize,
        stencil     : Stencil,
    ) -> Self {
        let name = algorithm.name();
        let (termination_reason, tolerance_satisfied) = exit.outcome();
        match exit {
            Exit::Exhausted => debug!("{name}: gave up after {iterations} iterations, last x={root}"),
            _               => debug!("{name}: {exit:?} after {iterations} iterations, x={root} f(x)={f_root}"),
        }

        Self {
            root,
            f_root,
            iterations,
            evaluations,
            termination_reason,
            tolerance_satisfied,
            stencil,
            algorithm_name: name,
        }
    }

    /// `false` only when the iteration limit was hit.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.termination_reason != TerminationReason::IterationLimit
    }

    /// Strict view of the report: non-convergence becomes an error
    /// carrying the last estimate.
    ///
    /// # Errors
    /// - [`RootFindingError::NotConverged`] if the solver hit its iteration limit.
    pub fn into_converged(self) -> Result<Self, RootFindingError> {
        if self.is_converged() {
            return Ok(self);
        }
        Err(RootFindingError::NotConverged {
            algorithm  : self.algorithm_name,
            x          : self.root,
            fx         : self.f_root,
            iterations : self.iterations,
        })
    }
}


impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::ToleranceReached        => "tolerance reached",
            TerminationReason::IterationLimit          => "iteration limit",
            TerminationReason::MachinePrecisionReached => "machine precision reached",
        };
        f.write_str(s)
    }
}

impl fmt::Display for ToleranceSatisfied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ToleranceSatisfied::AbsFxReached        => "|f(x)|",
            ToleranceSatisfied::WidthTolReached     => "bracket width",
            ToleranceSatisfied::StepSizeReached     => "step size",
            ToleranceSatisfied::ToleranceNotReached => "none",
        };
        f.write_str(s)
    }
}

/// One-line summary. The formatter precision applies to `root`
/// (`{:.3}` prints three decimals); `f(root)` is always scientific.
///
/// ```text
/// bisection: root=1.521 f(root)=-3.1e-13 iterations=41 evaluations=44 (tolerance reached: |f(x)|)
/// ```
impl fmt::Display for RootFindingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: root=", self.algorithm_name)?;
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.root)?,
            None    => write!(f, "{}", self.root)?,
        }
        write!(
            f,
            " f(root)={:.1e} iterations={} evaluations={} ({}",
            self.f_root, self.iterations, self.evaluations, self.termination_reason
        )?;
        if self.tolerance_satisfied != ToleranceSatisfied::ToleranceNotReached {
            write!(f, ": {}", self.tolerance_satisfied)?;
        }
        f.write_str(")")
    }
}
