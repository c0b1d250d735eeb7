//! Derivative and accumulation polynomials built on the matrix engine.
//!
//! Both work by sampling and refitting. `derivative` samples slopes at
//! `x = 1..=d` and interpolates a degree `d - 1` polynomial; `accumulate`
//! samples `∫_0^x P` with Simpson's rule at `x = 1..=d + 2` and interpolates
//! a degree `d + 1` polynomial.
use super::interpolation::interpolate;
use super::polynomial::Polynomial;
use crate::config::EliminationConfig;
use crate::error::FitError;
use crate::matrix::Matrix;

/// Subintervals used by `accumulate` for each sampled integral.
pub const SIMPSON_INTERVALS: usize = 100;

/// Slope of `poly` at `x`.
///
/// Writes `P(t) = (t - x)^2 Q(t) + m t + b` and matches coefficients power
/// by power. The unknowns are `b`, `m` and the coefficients of `Q`; the
/// augmented system has one row per power of `t` and is solved with
/// `rowreduce_with`. The tangent slope `m` is read off row 1.
pub fn slope_at(poly: &Polynomial, x: f64, config: &EliminationConfig) -> f64 {
    let degree = poly.degree().max(1);
    let rhs = degree + 1;

    // columns: b, m, q_0 .. q_{degree-2}, then P's coefficients
    let mut system = Matrix::new(degree + 1, degree + 2);
    system[(0, 0)] = 1.0;
    system[(1, 1)] = 1.0;
    let square = [x * x, -2.0 * x, 1.0];
    for q in 0..degree - 1 {
        for (power, &coefficient) in square.iter().enumerate() {
            system[(q + power, q + 2)] += coefficient;
        }
    }
    for power in 0..=degree {
        system[(power, rhs)] = poly.coefficient(power);
    }

    system.rowreduce_with(config);
    system[(1, rhs)]
}

/// Derivative polynomial of `poly`. Constants differentiate to the empty
/// polynomial.
pub fn derivative(poly: &Polynomial, config: &EliminationConfig) -> Result<Polynomial, FitError> {
    let degree = poly.degree();
    if degree == 0 {
        return Ok(Polynomial::new());
    }
    let xs: Vec<f64> = (1..=degree).map(|x| x as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| slope_at(poly, x, config)).collect();
    log::debug!("sampled {} slopes for degree {} derivative", ys.len(), degree - 1);
    interpolate(&xs, &ys, degree - 1, config)
}

/// Accumulation polynomial `A(x) = ∫_0^x P(t) dt`.
///
/// Exact up to rounding for polynomials of degree three or less; above that
/// the Simpson error of each sample carries into the fit.
pub fn accumulate(poly: &Polynomial, config: &EliminationConfig) -> Result<Polynomial, FitError> {
    let degree = poly.degree() + 1;
    let xs: Vec<f64> = (1..=degree + 1).map(|x| x as f64).collect();
    let ys: Vec<f64> = xs
        .iter()
        .map(|&x| simpson(|t| poly.evaluate(t), 0.0, x, SIMPSON_INTERVALS))
        .collect();
    log::debug!("sampled {} integrals for degree {} accumulation", ys.len(), degree);
    interpolate(&xs, &ys, degree, config)
}

/// Composite Simpson's rule over `[lower, upper]`. An odd `intervals` is
/// rounded up to the next even count; zero is treated as two.
pub fn simpson<F>(f: F, lower: f64, upper: f64, intervals: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let intervals = (intervals.max(2) + 1) & !1;
    let h = (upper - lower) / intervals as f64;

    let mut sum = f(lower) + f(upper);
    for i in 1..intervals {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(lower + i as f64 * h);
    }
    sum * h / 3.0
}
