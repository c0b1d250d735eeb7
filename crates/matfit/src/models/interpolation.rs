//! Polynomial interpolation through sample points.
//!
//! The coefficients of a degree `d` polynomial through `d + 1` points solve
//! the Vandermonde system `V c = y` with `V[i][j] = x_i^(d - j)`. The system
//! is solved with the matrix engine as `c = V^-1 y`.
use super::polynomial::Polynomial;
use crate::config::EliminationConfig;
use crate::error::FitError;
use crate::matrix::Matrix;

/// Fit the degree `degree` polynomial through the first `degree + 1`
/// samples.
///
/// # Errors
///
/// * `FitError::LengthMismatch` if `xs` and `ys` differ in length
/// * `FitError::InsufficientSamples` if fewer than `degree + 1` samples
/// * `FitError::Matrix` if the Vandermonde matrix is singular (repeated x)
pub fn interpolate(
    xs: &[f64],
    ys: &[f64],
    degree: usize,
    config: &EliminationConfig,
) -> Result<Polynomial, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let n = degree + 1;
    if xs.len() < n {
        return Err(FitError::InsufficientSamples {
            degree,
            needed: n,
            got: xs.len(),
        });
    }

    let mut vandermonde = Matrix::new(n, n);
    let mut rhs = Matrix::new(n, 1);
    for (row, (&x, &y)) in xs.iter().zip(ys).take(n).enumerate() {
        for col in 0..n {
            vandermonde[(row, col)] = x.powi((degree - col) as i32);
        }
        rhs[(row, 0)] = y;
    }

    let solution = vandermonde.inverse_with(config)?.multiply_with(&rhs, config)?;
    log::debug!("interpolated degree {} polynomial through {} points", degree, n);

    let mut polynomial = Polynomial::new();
    for row in 0..n {
        polynomial.add_term(degree - row, solution[(row, 0)]);
    }
    Ok(polynomial)
}
