use std::fmt;

use super::model_trait::FitModel;

/// `y = a * e^(b * x)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialFunction {
    a: f64,
    b: f64,
}

impl ExponentialFunction {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * (self.b * x).exp()
    }
}

impl FitModel for ExponentialFunction {
    fn evaluate(&self, x: f64) -> f64 {
        ExponentialFunction::evaluate(self, x)
    }

    fn name(&self) -> &str {
        "exponential"
    }
}

impl fmt::Display for ExponentialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y(x) = {} * exp({} * x)", self.a, self.b)
    }
}
