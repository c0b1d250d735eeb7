//! Dense `f64` matrix with elementary row operations.
//!
//! The shape is fixed at construction. Writes through `set_entry` outside
//! the matrix are ignored and reported through the return value; checked
//! reads go through `entry` and fail with `MatrixError::OutOfBounds`.
//!
//! Reduction and inversion live in `reduce`, products and other
//! whole-matrix transforms in `ops`.
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::math::{Grid, ShapeError};

mod ops;
mod reduce;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    m: Grid<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            m: Grid::zeros(rows, cols),
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut identity = Matrix::new(n, n);
        for ii in 0..n {
            identity.m[(ii, ii)] = 1.0;
        }
        identity
    }

    /// Build from row-major data of length `rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Ok(Self {
            m: Grid::from_shape_vec((rows, cols), data)?,
        })
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(ShapeError::new(nrows, ncols, data.len() + row.len()).into());
            }
            data.extend(row);
        }
        Matrix::from_shape_vec(nrows, ncols, data)
    }

    pub fn rows(&self) -> usize {
        self.m.nrows()
    }

    pub fn cols(&self) -> usize {
        self.m.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.m.shape()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Row-major view of every entry.
    pub fn as_slice(&self) -> &[f64] {
        self.m.as_slice()
    }

    pub fn row(&self, row: usize) -> &[f64] {
        self.m.row_slice(row)
    }

    /// Checked read.
    pub fn entry(&self, row: usize, col: usize) -> Result<f64> {
        self.m
            .get(row, col)
            .copied()
            .ok_or(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Write `value` at (`row`, `col`). Out-of-bounds writes are dropped and
    /// return `false`.
    pub fn set_entry(&mut self, row: usize, col: usize, value: f64) -> bool {
        match self.m.get_mut(row, col) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                log::trace!(
                    "ignoring write to ({}, {}) on {}x{} matrix",
                    row,
                    col,
                    self.rows(),
                    self.cols()
                );
                false
            }
        }
    }

    /// Exchange all entries of two rows.
    pub fn switch_rows(&mut self, first_row: usize, second_row: usize) {
        if first_row >= self.rows() || second_row >= self.rows() {
            log::trace!("ignoring swap of rows {} and {}", first_row, second_row);
            return;
        }
        self.m.swap_rows(first_row, second_row);
    }

    /// Multiply every entry of `row` by `scalar`.
    pub fn scalar_times_row(&mut self, scalar: f64, row: usize) {
        if row >= self.rows() {
            log::trace!("ignoring scaling of row {}", row);
            return;
        }
        for value in self.m.row_slice_mut(row) {
            *value *= scalar;
        }
    }

    /// `dst += scalar * src`, column by column.
    pub fn linear_comb_rows(&mut self, src: usize, dst: usize, scalar: f64) {
        if src >= self.rows() || dst >= self.rows() {
            log::trace!("ignoring combination of rows {} into {}", src, dst);
            return;
        }
        for col in 0..self.cols() {
            let delta = scalar * self.m[(src, col)];
            self.m[(dst, col)] += delta;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.m[index]
    }
}

/// Rounds to four decimal places for display.
fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            write!(f, "|")?;
            for value in self.row(row) {
                write!(f, " {} |", round4(*value))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
