use rand::Rng;

use super::Matrix;
use crate::config::EliminationConfig;
use crate::error::{MatrixError, Result};

/// Upper bound (exclusive) for the integer part of random entries.
const RANDOM_ENTRY_LIMIT: u32 = 25;

impl Matrix {
    /// Standard `(rows x k) * (k x cols)` product. No zero correction.
    pub fn multiply(&self, that: &Matrix) -> Result<Matrix> {
        if self.cols() != that.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.cols(),
                got: that.rows(),
            });
        }

        let mut product = Matrix::new(self.rows(), that.cols());
        for ii in 0..self.rows() {
            for jj in 0..that.cols() {
                let mut sum = 0.0;
                for kk in 0..that.rows() {
                    sum += self[(ii, kk)] * that[(kk, jj)];
                }
                product[(ii, jj)] = sum;
            }
        }
        Ok(product)
    }

    /// Product followed by `correct_zeros` under `config`.
    pub fn multiply_with(&self, that: &Matrix, config: &EliminationConfig) -> Result<Matrix> {
        let mut product = self.multiply(that)?;
        product.correct_zeros(config);
        Ok(product)
    }

    /// Elementwise sum of two matrices of the same shape.
    pub fn plus(&self, that: &Matrix) -> Result<Matrix> {
        if self.rows() != that.rows() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.rows(),
                got: that.rows(),
            });
        }
        if self.cols() != that.cols() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.cols(),
                got: that.cols(),
            });
        }

        let data = self
            .as_slice()
            .iter()
            .zip(that.as_slice())
            .map(|(a, b)| a + b)
            .collect();
        Matrix::from_shape_vec(self.rows(), self.cols(), data)
    }

    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix::new(self.cols(), self.rows());
        for ii in 0..self.rows() {
            for jj in 0..self.cols() {
                transposed[(jj, ii)] = self[(ii, jj)];
            }
        }
        transposed
    }

    /// Independent deep copy.
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// Random matrix of integers in `[0, 25)` with random signs. With
    /// `floats` each entry is further scaled by a uniform value in `[0, 1)`.
    pub fn random<R: Rng>(rows: usize, cols: usize, floats: bool, rng: &mut R) -> Matrix {
        let mut random = Matrix::new(rows, cols);
        for value in random.m.as_mut_slice() {
            let mut entry = f64::from(rng.gen_range(0..RANDOM_ENTRY_LIMIT));
            if floats {
                entry *= rng.gen::<f64>();
            }
            if rng.gen::<bool>() {
                entry = -entry;
            }
            *value = entry;
        }
        random
    }
}
