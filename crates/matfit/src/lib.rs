//! matfit: dense matrix row reduction and model fit diagnostics.
//!
//! This crate provides a small `f64` matrix engine (elementary row
//! operations, Gauss-Jordan reduction, inversion through an augmented
//! identity block), polynomial and exponential models that share an
//! evaluate/R² contract, and polynomial interpolation, derivative and
//! accumulation built on the engine.
//!
//! Storage lives in the lightweight `math` containers so the crate stays
//! free of heavyweight linear algebra dependencies.
pub mod config;
pub mod error;
pub mod math;
pub mod matrix;
pub mod models;
pub mod stats;

pub use config::{EliminationConfig, PivotStrategy};
pub use error::{FitError, MatrixError};
pub use matrix::Matrix;
pub use models::{
    accumulate, derivative, interpolate, slope_at, ExponentialFunction, FitModel, Polynomial,
};
