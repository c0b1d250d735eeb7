//! Subcommand bodies. Each returns the text the binary prints.
use std::fmt::Write;

use anyhow::Result;
use matfit::{interpolate, EliminationConfig, ExponentialFunction, FitModel, Matrix};

pub fn invert(matrix: &Matrix, config: &EliminationConfig) -> Result<String> {
    let inverse = matrix.inverse_with(config)?;
    Ok(format!("Inverse:\n{}", inverse))
}

pub fn rref(matrix: &Matrix, config: &EliminationConfig) -> String {
    let mut reduced = matrix.copy();
    reduced.rowreduce_with(config);
    format!("Reduced row-echelon form:\n{}", reduced)
}

/// Interpolate through the first `degree + 1` points and score the result
/// against every point.
pub fn fit(xs: &[f64], ys: &[f64], degree: usize, config: &EliminationConfig) -> Result<String> {
    let polynomial = interpolate(xs, ys, degree, config)?;
    let mut out = String::new();
    writeln!(out, "{}", polynomial)?;
    match polynomial.r2_report(xs, ys) {
        Ok(report) => writeln!(out, "{}", report)?,
        Err(err) => {
            log::warn!("skipping r^2 report: {}", err);
            writeln!(out, "r^2 unavailable: {}", err)?
        }
    }
    Ok(out)
}

pub fn exponential(xs: &[f64], ys: &[f64], a: f64, b: f64) -> Result<String> {
    let model = ExponentialFunction::new(a, b);
    Ok(format!("{}\n{}\n", model, model.r2_report(xs, ys)?))
}
