//! false position, run once per endpoint-rescaling variant
use approx::assert_abs_diff_eq;
use rootkit::root_finding::errors::RootFindingError;
use rootkit::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError, RegulaFalsiVariant};
use rootkit::root_finding::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil};
use test_log::test;

type TestResult = Result<(), RegulaFalsiError>;

const ALL: [RegulaFalsiVariant; 4] = [
    RegulaFalsiVariant::Pure,
    RegulaFalsiVariant::Illinois,
    RegulaFalsiVariant::Pegasus,
    RegulaFalsiVariant::AndersonBjorck,
];

fn with(variant: RegulaFalsiVariant) -> RegulaFalsiCfg {
    RegulaFalsiCfg::new().with_variant(variant)
}

/// The final bracket still straddles a sign change.
fn still_brackets(f: impl Fn(f64) -> f64, res: &RootFindingReport) {
    let Stencil::Bracket { bounds: [lo, hi] } = res.stencil else {
        panic!("{} should report a bracket", res.algorithm_name);
    };
    assert!(lo <= hi, "[{lo}, {hi}]");
    assert!(f(lo) * f(hi) <= 0.0, "no sign change on [{lo}, {hi}]");
}


#[test]
fn every_variant_finds_sqrt_two() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    for v in ALL {
        let cfg = with(v).set_abs_x(1e-10)?.set_rel_x(0.0)?.set_abs_fx(1e-10)?;
        let res = regula_falsi(f, 0.0, 2.0, cfg)?;

        assert!(res.is_converged(), "{res}");
        assert_abs_diff_eq!(res.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        still_brackets(f, &res);
    }
    Ok(())
}

#[test]
fn every_variant_finds_cubic_root() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;
    for v in ALL {
        let res = regula_falsi(f, 1.0, 2.0, with(v).set_abs_fx(1e-10)?)?;

        assert!(res.is_converged(), "{res}");
        assert_abs_diff_eq!(res.root, 1.5213797, epsilon = 1e-7);
        still_brackets(f, &res);
    }
    Ok(())
}

#[test]
fn chord_of_a_line_hits_its_root() -> TestResult {
    for v in ALL {
        let res = regula_falsi(|x: f64| 2.0 * x - 6.0, 0.0, 10.0, with(v))?;

        assert_eq!(res.root, 3.0, "{v:?}");
        assert_eq!(res.iterations, 1, "{v:?}");
        assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached, "{v:?}");
    }
    Ok(())
}

#[test]
fn chord_across_every_finite_float() -> TestResult {
    for v in ALL {
        let res = regula_falsi(f64::atan, -f64::MAX, f64::MAX, with(v))?;

        assert_eq!(res.root, 0.0, "{v:?}");
        assert_eq!(res.iterations, 1, "{v:?}");
    }
    Ok(())
}

#[test]
fn input_errors_do_not_depend_on_variant() {
    for v in ALL {
        let err = regula_falsi(|x: f64| 1.0 + x * x, -1.0, 1.0, with(v)).unwrap_err();
        assert!(matches!(err, RegulaFalsiError::NoSignChange { a, b } if (a, b) == (-1.0, 1.0)), "{v:?}");

        let err = regula_falsi(|x: f64| x, 2.0, 0.0, with(v)).unwrap_err();
        assert!(matches!(err, RegulaFalsiError::InvalidBounds { .. }), "{v:?}");

        let err = regula_falsi(|x: f64| x.sqrt() - 2.0, -1.0, 5.0, with(v)).unwrap_err();
        assert!(matches!(
            err,
            RegulaFalsiError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx }) if x == -1.0 && fx.is_nan()
        ), "{v:?}");
    }
}

#[test]
fn root_on_an_endpoint_needs_no_iteration() -> TestResult {
    for v in ALL {
        for (a, b) in [(0.0, 5.0), (-5.0, 0.0)] {
            let res = regula_falsi(|x: f64| x, a, b, with(v))?;
            assert_eq!((res.root, res.iterations), (0.0, 0));
            assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
        }
    }
    Ok(())
}

#[test]
fn one_iteration_budget() -> TestResult {
    // chord of x^2 - 2 from (0, -2) to (2, 2) crosses zero at 1
    for v in ALL {
        let cfg = with(v)
            .set_abs_fx(1e-30)?
            .set_rel_x(1e-16)?
            .set_abs_x(0.0)?
            .set_max_iter(1)?;
        let res = regula_falsi(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;

        assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
        assert_eq!((res.root, res.iterations), (1.0, 1));
        assert_eq!(res.stencil.stencil(), &[1.0, 2.0]);
    }
    Ok(())
}

#[test]
fn starting_bracket_already_narrow() -> TestResult {
    let f = |x: f64| x + 1e-16;
    for v in ALL {
        let cfg = with(v).set_abs_fx(1e-20)?.set_abs_x(1e-12)?.set_rel_x(0.0)?;
        let res = regula_falsi(f, -3e-16, 1e-16, cfg)?;

        assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
        assert_eq!(res.iterations, 0);
        still_brackets(f, &res);
    }
    Ok(())
}

#[test]
fn rescaling_beats_pure_on_stiff_convex_function() -> TestResult {
    // x^10 - 1 on [0, 1.3] pins the right endpoint under pure false position
    let f   = |x: f64| x.powi(10) - 1.0;
    let run = |v| -> Result<RootFindingReport, RegulaFalsiError> {
        regula_falsi(f, 0.0, 1.3, with(v).set_abs_fx(1e-10)?.set_max_iter(500)?)
    };

    let pure = run(RegulaFalsiVariant::Pure)?;
    assert!(pure.is_converged(), "{pure}");
    assert_abs_diff_eq!(pure.root, 1.0, epsilon = 1e-9);

    for v in &ALL[1..] {
        let res = run(*v)?;
        assert!(res.is_converged(), "{res}");
        assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-9);
        assert!(res.iterations < pure.iterations, "{v:?} took {} vs pure {}", res.iterations, pure.iterations);
        still_brackets(f, &res);
    }
    Ok(())
}

#[test]
fn report_names_the_variant() -> TestResult {
    let expected = [
        "regula_falsi_pure",
        "regula_falsi_illinois",
        "regula_falsi_pegasus",
        "regula_falsi_anderson_bjorck",
    ];
    for (v, name) in ALL.into_iter().zip(expected) {
        let res = regula_falsi(|x: f64| x * x - 2.0, 0.0, 2.0, with(v))?;
        assert_eq!(res.algorithm_name, name);
    }
    Ok(())
}

#[test]
fn illinois_unless_chosen() {
    assert_eq!(RegulaFalsiCfg::new().variant(), RegulaFalsiVariant::Illinois);
}
