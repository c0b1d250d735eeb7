use std::fmt;

use super::model_trait::FitModel;
use crate::math::Array1;

/// Univariate polynomial stored as coefficients indexed by degree.
///
/// The public ordering (`coefficients`, `Display`, `from_coefficients`) is
/// highest degree first: position `i` of a length `n` sequence is the term
/// of degree `n - i - 1`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    // index == degree
    terms: Array1<f64>,
}

impl Polynomial {
    /// Empty polynomial. Evaluates to zero everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from coefficients ordered highest degree first.
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        Self {
            terms: coefficients.iter().rev().copied().collect(),
        }
    }

    /// Set the coefficient of `x^degree`, padding with zero terms as needed.
    pub fn add_term(&mut self, degree: usize, coefficient: f64) {
        self.terms.grow_to(degree + 1);
        self.terms[degree] = coefficient;
    }

    /// Highest stored degree; 0 for an empty polynomial.
    pub fn degree(&self) -> usize {
        self.terms.len().saturating_sub(1)
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `x^degree`, zero when never set.
    pub fn coefficient(&self, degree: usize) -> f64 {
        self.terms.get(degree).copied().unwrap_or(0.0)
    }

    /// Coefficients ordered highest degree first.
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().rev().copied().collect()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// `Σ c_d * x^d`, one power per term.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .enumerate()
            .map(|(degree, &coefficient)| coefficient * x.powi(degree as i32))
            .sum()
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Polynomial::from_coefficients(&coefficients)
    }
}

impl FitModel for Polynomial {
    fn evaluate(&self, x: f64) -> f64 {
        Polynomial::evaluate(self, x)
    }

    fn name(&self) -> &str {
        "polynomial"
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(x) = ")?;
        if self.is_empty() {
            return write!(f, "0");
        }
        for degree in (0..self.terms.len()).rev() {
            write!(f, "{}", self.terms[degree])?;
            if degree > 0 {
                write!(f, " * x^{} + ", degree)?;
            }
        }
        Ok(())
    }
}
