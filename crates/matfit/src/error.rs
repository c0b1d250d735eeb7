use thiserror::Error;

use crate::math::ShapeError;

/// Errors raised by the matrix engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    /// Read outside `[0, rows) x [0, cols)`
    #[error("entry ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Forward elimination left a zero pivot on the diagonal
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular { column: usize },

    /// Back substitution did not leave the identity in the left block
    #[error("elimination left column {column} unreduced; retry with partial pivoting")]
    Unreduced { column: usize },

    /// Inner or outer dimensions do not agree
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors raised while scoring or fitting a model against samples.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("x and y samples must have equal length ({xs} != {ys})")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("at least one sample is required")]
    EmptySamples,

    /// All observed y values are equal, so R² is undefined
    #[error("total sum of squares is zero; r^2 is undefined")]
    DegenerateFit,

    #[error("degree {degree} interpolation needs {needed} samples, got {got}")]
    InsufficientSamples {
        degree: usize,
        needed: usize,
        got: usize,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;
