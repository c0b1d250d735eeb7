pub mod calculus;
pub mod exponential;
pub mod interpolation;
pub mod model_trait;
pub mod polynomial;

pub use calculus::{accumulate, derivative, slope_at};
pub use exponential::ExponentialFunction;
pub use interpolation::interpolate;
pub use model_trait::FitModel;
pub use polynomial::Polynomial;
