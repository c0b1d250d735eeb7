//! Small dense containers the matrix engine and models are built on.
//!
//! Provides `Grid` (row-major 2D) and `Array1` (ordered 1D) with checked
//! accessors. They carry no numeric behaviour of their own.
pub mod grid;
pub mod vector;

pub use grid::{Grid, ShapeError};
pub use vector::Array1;
