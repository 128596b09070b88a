//! bisection: convergence, stopping rules and input checks
use approx::assert_abs_diff_eq;
use rootkit::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use rootkit::root_finding::errors::{RootFindingError, ToleranceError};
use rootkit::root_finding::report::{TerminationReason, ToleranceSatisfied};
use test_log::test;

type TestResult = Result<(), BisectionError>;

fn cubic(x: f64) -> f64 { x * x * x - x - 2.0 }

/// A residual target nothing will reach, so runs end on width or budget.
fn unreachable_residual() -> Result<BisectionCfg, BisectionError> {
    Ok(BisectionCfg::new().set_abs_fx(1e-300)?)
}


#[test]
fn converges_to_sqrt_two() -> TestResult {
    let cfg = BisectionCfg::new()
        .set_abs_x(1e-10)?
        .set_rel_x(0.0)?
        .set_abs_fx(1e-10)?
        .set_max_iter(60)?;
    let res = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;

    assert!(res.is_converged(), "{res}");
    assert_abs_diff_eq!(res.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn cubic_root_meets_residual() -> TestResult {
    let res = bisection(cubic, 1.0, 2.0, BisectionCfg::new().set_abs_fx(1e-10)?)?;

    assert_eq!(
        (res.termination_reason, res.tolerance_satisfied),
        (TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached)
    );
    assert!(cubic(res.root).abs() <= 1e-10);
    assert_abs_diff_eq!(res.root, 1.5213797, epsilon = 1e-7);
    Ok(())
}

#[test]
fn each_step_halves_the_bracket() -> TestResult {
    let mut width = 1.0;
    for n in 1..=20 {
        width *= 0.5;
        let res = bisection(cubic, 1.0, 2.0, unreachable_residual()?.set_max_iter(n)?)?;

        assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
        assert_eq!(res.iterations, n);
        let &[lo, hi] = res.stencil.stencil() else { panic!("bracket has two ends") };
        assert_eq!(hi - lo, width);
        assert!(cubic(lo) < 0.0 && 0.0 < cubic(hi), "n={n}: [{lo}, {hi}]");
    }
    Ok(())
}

#[test]
fn root_left_of_origin() -> TestResult {
    let cfg = BisectionCfg::new().set_abs_x(1e-10)?.set_abs_fx(1e-10)?;
    let res = bisection(|x: f64| x + 5.0, -10.0, 0.0, cfg)?;

    assert!(res.is_converged());
    assert_abs_diff_eq!(res.root, -5.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn same_sign_costs_two_evaluations() {
    let mut calls = 0;
    let err = bisection(|x: f64| { calls += 1; 1.0 + x * x }, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { a, b } if (a, b) == (-1.0, 1.0)));
    assert_eq!(calls, 2);
}

#[test]
fn nan_at_an_endpoint() {
    let err = bisection(|x: f64| x.sqrt() - 2.0, -1.0, 5.0, BisectionCfg::new()).unwrap_err();
    let BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx }) = err else {
        panic!("unexpected error {err}");
    };
    assert_eq!(x, -1.0);
    assert!(fx.is_nan());
}

#[test]
fn midpoint_lands_on_a_pole() {
    let err = bisection(|x: f64| x.recip(), -1.0, 1.0, BisectionCfg::new()).unwrap_err();
    let BisectionError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx }) = err else {
        panic!("unexpected error {err}");
    };
    assert_eq!(x, 0.0);
    assert!(fx.is_infinite());
}

#[test]
fn bad_brackets_are_rejected() {
    for (a, b) in [(2.0, 0.0), (1.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
        let err = bisection(|x: f64| x - 1.0, a, b, BisectionCfg::new()).unwrap_err();
        assert!(matches!(err, BisectionError::InvalidBounds { .. }), "[{a}, {b}]: {err}");
    }
}

#[test]
fn root_on_either_end() -> TestResult {
    for (a, b) in [(0.0, 5.0), (-5.0, 0.0)] {
        let res = bisection(|x: f64| x, a, b, BisectionCfg::new())?;

        assert_eq!(res.root, 0.0);
        assert_eq!(res.iterations, 0);
        assert_eq!(res.evaluations, 2);
        assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    }
    Ok(())
}

#[test]
fn zero_function_reports_left_end() -> TestResult {
    let res = bisection(|_x: f64| 0.0, 1.0, 2.0, BisectionCfg::new())?;
    assert_eq!((res.root, res.iterations), (1.0, 0));
    Ok(())
}

#[test]
fn spent_budget_is_not_convergence() -> TestResult {
    let cfg = unreachable_residual()?.set_abs_x(0.0)?.set_rel_x(1e-12)?.set_max_iter(10)?;
    let res = bisection(|x: f64| x, -3.0, 2.0, cfg)?;

    assert!(!res.is_converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 10);

    // [-5, 1] -> midpoint -2 on the first step
    let res = bisection(|x: f64| x, -5.0, 1.0, BisectionCfg::new().set_max_iter(1)?)?;
    let err = res.into_converged().unwrap_err();
    assert!(matches!(
        err,
        RootFindingError::NotConverged { algorithm: "bisection", iterations: 1, x, .. } if x == -2.0
    ));
    Ok(())
}

#[test]
fn bracket_already_under_width_tolerance() -> TestResult {
    let cfg = BisectionCfg::new().set_abs_fx(1e-20)?.set_abs_x(1e-12)?;
    let res = bisection(|x: f64| x, -3e-16, 1e-16, cfg)?;

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.iterations, 0);
    // both ends, then the reported midpoint
    assert_eq!(res.evaluations, 3);
    Ok(())
}

#[test]
fn relative_width_tolerance_scales_with_bracket() -> TestResult {
    let cfg = BisectionCfg::new().set_abs_x(1e-12)?.set_rel_x(0.5)?.set_max_iter(100)?;
    let res = bisection(|x: f64| x - 10.0, 0.0, 21.0, cfg)?;

    // 21 -> 10.5 -> 5.25, under 0.5 * 10.5
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn bracket_spanning_every_finite_float() -> TestResult {
    let res = bisection(f64::atan, -f64::MAX, f64::MAX, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn setters_refuse_bad_values() {
    assert!(matches!(BisectionCfg::new().set_abs_fx(0.0), Err(ToleranceError::InvalidAbsFx { .. })));
    assert!(matches!(BisectionCfg::new().set_abs_x(f64::INFINITY), Err(ToleranceError::InvalidAbsX { .. })));
    assert!(matches!(BisectionCfg::new().set_rel_x(-1.0), Err(ToleranceError::InvalidRelX { .. })));
    assert!(matches!(BisectionCfg::new().set_max_iter(0), Err(RootFindingError::InvalidMaxIter { got: 0 })));
}

#[test]
fn report_renders_on_one_line() -> TestResult {
    let line = format!("{:.3}", bisection(cubic, 1.0, 2.0, BisectionCfg::new())?);

    assert!(line.starts_with("bisection: root=1.521 "), "{line}");
    assert!(line.ends_with("(tolerance reached: |f(x)|)"), "{line}");
    Ok(())
}
