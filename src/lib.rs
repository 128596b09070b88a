//! Root-finding for scalar nonlinear equations `f(x) = 0`.
//!
//! Bracketing methods ([`root_finding::bisection`], [`root_finding::regula_falsi`])
//! and open methods ([`root_finding::newton`], [`root_finding::secant`],
//! [`root_finding::modified_secant`]) all return a
//! [`root_finding::report::RootFindingReport`] on success, or a method-specific
//! error for invalid input. Running out of iterations is not an error: the report
//! carries [`root_finding::report::TerminationReason::IterationLimit`] and the last
//! estimate.
//!
//! ```
//! use rootkit::root_finding::newton::{newton, NewtonCfg};
//!
//! let cfg  = NewtonCfg::new().set_abs_fx(1e-10).unwrap();
//! let root = newton(|x: f64| x * x - 2.0, Some(|x: f64| 2.0 * x), 1.0, cfg)
//!     .unwrap()
//!     .root;
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod root_finding;
