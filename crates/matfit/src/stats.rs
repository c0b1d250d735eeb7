use statrs::statistics::Statistics;

use crate::error::FitError;

/// Coefficient of determination of `predict` against paired samples.
///
/// `R² = 1 - SSres / SStot` where `SStot = Σ(y - ȳ)²` and
/// `SSres = Σ(y - predict(x))²`.
///
/// # Errors
///
/// * `FitError::LengthMismatch` if `xs` and `ys` differ in length
/// * `FitError::EmptySamples` if there are no samples
/// * `FitError::DegenerateFit` if every `y` is equal (`SStot == 0`)
pub fn r_squared<F>(predict: F, xs: &[f64], ys: &[f64]) -> Result<f64, FitError>
where
    F: Fn(f64) -> f64,
{
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if ys.is_empty() {
        return Err(FitError::EmptySamples);
    }

    let mean = ys.mean();
    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        ss_res += (y - predict(x)).powi(2);
        ss_tot += (y - mean).powi(2);
    }

    if ss_tot == 0.0 {
        return Err(FitError::DegenerateFit);
    }
    Ok(1.0 - ss_res / ss_tot)
}
