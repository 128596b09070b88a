//! Demo: locate the roots of `x^2 - 7x + 10` with every method.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see solver progress.

use std::error::Error;

use rootkit::root_finding::{
    bisection, BisectionCfg,
    regula_falsi, RegulaFalsiCfg, RegulaFalsiVariant,
    newton, NewtonCfg,
    secant, SecantCfg,
    modified_secant, ModifiedSecantCfg,
    incremental_search,
};
use rootkit::root_finding::report::RootFindingReport;

fn print_root(method: &str, idx: usize, report: &RootFindingReport) {
    if report.is_converged() {
        println!("{method}: root in the interval {idx}: {:.3}", report.root);
    } else {
        println!("{method}: no root in the interval {idx} ({report:.3})");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let f     = |x: f64| x * x - 7.0 * x + 10.0;
    let f_der = |x: f64| 2.0 * x - 7.0;

    // incremental search for the number of roots and their intervals
    let brackets = incremental_search(f, -4.0, 8.0, 0.8)?;
    println!("Number of roots: {}", brackets.len());

    for (idx, br) in brackets.iter().enumerate() {
        let report = bisection(f, br.left, br.right, BisectionCfg::new())?;
        print_root("Bisection method", idx, &report);
    }

    let cfg = RegulaFalsiCfg::new().with_variant(RegulaFalsiVariant::Pure);
    for (idx, br) in brackets.iter().enumerate() {
        let report = regula_falsi(f, br.left, br.right, cfg)?;
        print_root("False position method", idx, &report);
    }

    for (idx, br) in brackets.iter().enumerate() {
        let report = newton(f, Some(f_der), br.midpoint(), NewtonCfg::new())?;
        print_root("Newton-Raphson method", idx, &report);
    }

    for (idx, br) in brackets.iter().enumerate() {
        let report = secant(f, br.left, br.right, SecantCfg::new())?;
        print_root("Secant method", idx, &report);
    }

    let cfg = ModifiedSecantCfg::new().set_perturbation(0.1)?;
    for (idx, br) in brackets.iter().enumerate() {
        let report = modified_secant(f, br.left, cfg)?;
        print_root("Modified secant method", idx, &report);
    }

    Ok(())
}
