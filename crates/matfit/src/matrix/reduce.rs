//! Gauss-Jordan elimination and inversion.
//!
//! Reduction runs in two passes over `min(rows, cols)` columns, both in
//! ascending column order:
//!
//! 1. forward: bring a pivot onto the diagonal (swapping rows), clear the
//!    entries below it, scale the pivot row to a leading one;
//! 2. backward: clear the entries above each diagonal pivot without swaps.
//!
//! Zero diagonals are never divided by, so a column with no pivot gets its
//! fallback row swapped in and is not eliminated.
use super::Matrix;
use crate::config::{EliminationConfig, PivotStrategy};
use crate::error::{MatrixError, Result};

impl Matrix {
    /// Row holding the pivot for `col`, or `None` when `col` lies outside
    /// `min(rows, cols)`.
    ///
    /// With `PivotStrategy::FirstNonZero` a nonzero diagonal wins, otherwise
    /// the first nonzero row counted from the top of the matrix, otherwise
    /// row 0. With `PivotStrategy::Partial` the largest magnitude entry at
    /// or below the diagonal is used, falling back to `col` itself.
    pub fn find_pivot(&self, col: usize, strategy: PivotStrategy) -> Option<usize> {
        if col >= self.pivot_span() {
            return None;
        }
        let pivot_row = match strategy {
            PivotStrategy::FirstNonZero => {
                if self[(col, col)] != 0.0 {
                    return Some(col);
                }
                (0..self.rows())
                    .find(|&row| self[(row, col)] != 0.0)
                    .unwrap_or(0)
            }
            PivotStrategy::Partial => {
                let mut pivot_row = col;
                let mut best = self[(col, col)].abs();
                for row in col + 1..self.rows() {
                    let candidate = self[(row, col)].abs();
                    if candidate > best {
                        best = candidate;
                        pivot_row = row;
                    }
                }
                pivot_row
            }
        };
        Some(pivot_row)
    }

    /// Move the pivot for `col` onto the diagonal and clear every entry
    /// below it. Columns outside `min(rows, cols)` are ignored.
    pub fn zeros_down(&mut self, col: usize, strategy: PivotStrategy) {
        let pivot_row = match self.find_pivot(col, strategy) {
            Some(row) => row,
            None => {
                log::trace!("zeros_down: column {} has no diagonal, ignored", col);
                return;
            }
        };
        // an empty column still swaps in the fallback row
        if pivot_row != col {
            self.switch_rows(pivot_row, col);
        }

        let pivot = self[(col, col)];
        if pivot == 0.0 {
            return;
        }
        for row in col + 1..self.rows() {
            let value = self[(row, col)];
            if value != 0.0 {
                self.linear_comb_rows(col, row, -value / pivot);
            }
        }
    }

    /// Clear every entry above the diagonal pivot of `col`. Columns outside
    /// `min(rows, cols)` are ignored.
    pub fn zeros_up(&mut self, col: usize, strategy: PivotStrategy) {
        let pivot_row = match self.find_pivot(col, strategy) {
            Some(row) => row,
            None => {
                log::trace!("zeros_up: column {} has no diagonal, ignored", col);
                return;
            }
        };
        log::trace!("column {}: located pivot row {}", col, pivot_row);

        let pivot = self[(col, col)];
        if pivot == 0.0 {
            return;
        }
        for row in (0..col).rev() {
            let value = self[(row, col)];
            if value != 0.0 {
                self.linear_comb_rows(col, row, -value / pivot);
            }
        }
    }

    /// Scale row `col` so its diagonal becomes one. Zero and unit diagonals
    /// are left alone.
    fn normalize_pivot_row(&mut self, col: usize) {
        let diagonal = self[(col, col)];
        if diagonal != 0.0 && diagonal != 1.0 {
            self.scalar_times_row(1.0 / diagonal, col);
        }
    }

    fn pivot_span(&self) -> usize {
        self.rows().min(self.cols())
    }

    fn forward_pass(&mut self, config: &EliminationConfig) {
        for col in 0..self.pivot_span() {
            self.zeros_down(col, config.pivot_strategy);
            self.normalize_pivot_row(col);
        }
    }

    fn backward_pass(&mut self, config: &EliminationConfig) {
        for col in 0..self.pivot_span() {
            self.zeros_up(col, config.pivot_strategy);
            self.normalize_pivot_row(col);
        }
    }

    /// Reduce in place to reduced row-echelon form using default settings.
    pub fn rowreduce(&mut self) {
        self.rowreduce_with(&EliminationConfig::default());
    }

    pub fn rowreduce_with(&mut self, config: &EliminationConfig) {
        log::debug!(
            "row reducing {}x{} matrix ({:?} pivoting)",
            self.rows(),
            self.cols(),
            config.pivot_strategy
        );
        self.forward_pass(config);
        self.backward_pass(config);
        self.correct_zeros(config);
    }

    /// Inverse of a square, non-singular matrix using default settings.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&EliminationConfig::default())
    }

    /// Reduce `[A | I]` and read the inverse off the right block.
    ///
    /// After the forward pass every left-block diagonal entry must exceed
    /// `config.zero_tolerance` in magnitude, otherwise the matrix is
    /// reported as singular. After the backward pass the left block must be
    /// the identity; a row swapped above the diagonal by
    /// `PivotStrategy::FirstNonZero` can leave it unreduced, which is
    /// reported as `MatrixError::Unreduced`.
    pub fn inverse_with(&self, config: &EliminationConfig) -> Result<Matrix> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let n = self.rows();

        let mut augmented = Matrix::new(n, 2 * n);
        for row in 0..n {
            for col in 0..n {
                augmented[(row, col)] = self[(row, col)];
            }
            augmented[(row, n + row)] = 1.0;
        }

        augmented.forward_pass(config);
        if let Some(column) =
            (0..n).find(|&col| augmented[(col, col)].abs() <= config.zero_tolerance)
        {
            log::warn!("inverse: zero pivot in column {} of {}x{} matrix", column, n, n);
            return Err(MatrixError::Singular { column });
        }
        augmented.backward_pass(config);

        // residuals grow with the size of the entries being cancelled
        let tolerance = config.zero_tolerance * self.max_abs_entry().max(1.0);
        if let Some(column) = augmented.unreduced_column(n, tolerance) {
            log::warn!(
                "inverse: left block not reduced in column {} ({:?} pivoting)",
                column,
                config.pivot_strategy
            );
            return Err(MatrixError::Unreduced { column });
        }
        augmented.correct_zeros(config);

        let mut inverted = Matrix::new(n, n);
        for row in 0..n {
            for col in 0..n {
                inverted[(row, col)] = augmented[(row, n + col)];
            }
        }
        Ok(inverted)
    }

    /// First column of the leading `n x n` block that differs from the
    /// identity by more than `tolerance`.
    fn unreduced_column(&self, n: usize, tolerance: f64) -> Option<usize> {
        (0..n).find(|&col| {
            (0..n).any(|row| {
                let expected = if row == col { 1.0 } else { 0.0 };
                (self[(row, col)] - expected).abs() > tolerance
            })
        })
    }

    fn max_abs_entry(&self) -> f64 {
        self.as_slice().iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    /// Snap entries strictly inside `(-tol, tol)` to zero when
    /// `config.correct_zeros` is set.
    pub fn correct_zeros(&mut self, config: &EliminationConfig) {
        if !config.correct_zeros {
            return;
        }
        let tolerance = config.zero_tolerance;
        for value in self.m.as_mut_slice() {
            if *value > -tolerance && *value < tolerance {
                *value = 0.0;
            }
        }
    }
}
