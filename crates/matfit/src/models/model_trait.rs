use crate::error::FitError;
use crate::stats;

/// Shared contract of the fitted models: evaluate at a point and score
/// against observed samples.
pub trait FitModel {
    /// Model value at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Human readable model family, used in reports
    fn name(&self) -> &str {
        "model"
    }

    /// Coefficient of determination over paired samples. See
    /// [`stats::r_squared`] for the error cases.
    fn r_squared(&self, xs: &[f64], ys: &[f64]) -> Result<f64, FitError> {
        stats::r_squared(|x| self.evaluate(x), xs, ys)
    }

    /// One-line R² summary, e.g. `The r^2 value of the polynomial is 1`.
    fn r2_report(&self, xs: &[f64], ys: &[f64]) -> Result<String, FitError> {
        let r2 = self.r_squared(xs, ys)?;
        Ok(format!("The r^2 value of the {} is {}", self.name(), r2))
    }
}
