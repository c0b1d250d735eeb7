//! Integration tests for the polynomial and exponential models, R² scoring
//! and interpolation.

use approx::assert_relative_eq;

use matfit::{interpolate, EliminationConfig, ExponentialFunction, FitError, FitModel, Polynomial};

// ---------------------------------------------------------------------------
// Polynomial
// ---------------------------------------------------------------------------

#[test]
fn add_term_pads_with_zero_terms() {
    let mut p = Polynomial::new();
    assert!(p.is_empty());
    p.add_term(3, 2.0);
    assert_eq!(p.len(), 4);
    assert_eq!(p.degree(), 3);
    assert_eq!(p.coefficients(), vec![2.0, 0.0, 0.0, 0.0]);
}

#[test]
fn add_term_in_any_order_keeps_degrees() {
    let mut p = Polynomial::new();
    p.add_term(0, 5.0);
    p.add_term(2, 1.0);
    assert_eq!(p.coefficient(0), 5.0);
    assert_eq!(p.coefficient(2), 1.0);
    assert_eq!(p.coefficient(7), 0.0);
    assert_eq!(p.coefficients(), vec![1.0, 0.0, 5.0]);
}

#[test]
fn add_term_overwrites_existing_coefficient() {
    let mut p = Polynomial::new();
    p.add_term(1, 3.0);
    p.add_term(1, -4.0);
    assert_eq!(p.coefficients(), vec![-4.0, 0.0]);
}

#[test]
fn evaluate_x_squared_minus_one() {
    let mut p = Polynomial::new();
    p.add_term(2, 1.0);
    p.add_term(1, 0.0);
    p.add_term(0, -1.0);
    assert_eq!(p.evaluate(3.0), 8.0);
    assert_eq!(p.evaluate(-1.0), 0.0);
}

#[test]
fn evaluate_at_zero_returns_constant_term() {
    let mut p = Polynomial::new();
    p.add_term(4, 2.5);
    assert_eq!(p.evaluate(0.0), 0.0);
    p.add_term(0, -7.0);
    assert_eq!(p.evaluate(0.0), -7.0);
}

#[test]
fn clear_empties_polynomial() {
    let mut p = Polynomial::from_coefficients(&[1.0, 2.0, 3.0]);
    p.clear();
    assert!(p.is_empty());
    assert_eq!(p.degree(), 0);
    assert_eq!(p.evaluate(10.0), 0.0);
}

#[test]
fn polynomial_display() {
    let p = Polynomial::from(vec![1.0, 0.0, -1.0]);
    assert_eq!(p.to_string(), "P(x) = 1 * x^2 + 0 * x^1 + -1");
    assert_eq!(Polynomial::new().to_string(), "P(x) = 0");
}

// ---------------------------------------------------------------------------
// Exponential
// ---------------------------------------------------------------------------

#[test]
fn exponential_evaluate_and_display() {
    let e = ExponentialFunction::new(2.0, 0.5);
    assert_eq!(e.a(), 2.0);
    assert_eq!(e.b(), 0.5);
    assert_relative_eq!(e.evaluate(2.0), 2.0 * 1f64.exp());
    assert_eq!(e.to_string(), "Y(x) = 2 * exp(0.5 * x)");
}

// ---------------------------------------------------------------------------
// R²
// ---------------------------------------------------------------------------

#[test]
fn identity_polynomial_fits_perfectly() {
    let p = Polynomial::from(vec![1.0, 0.0]);
    let r2 = p.r_squared(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(r2, 1.0);
    assert_eq!(
        p.r2_report(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap(),
        "The r^2 value of the polynomial is 1"
    );
}

#[test]
fn imperfect_fit_scores_below_one() {
    // y = x against slightly noisy samples
    let p = Polynomial::from(vec![1.0, 0.0]);
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys = [1.0, 2.5, 2.5, 4.0];
    // mean 2.5, SStot = 2.25 + 0 + 0 + 2.25 = 4.5, SSres = 0.25 + 0.25 = 0.5
    let r2 = p.r_squared(&xs, &ys).unwrap();
    assert_relative_eq!(r2, 1.0 - 0.5 / 4.5);
}

#[test]
fn exponential_r_squared() {
    let e = ExponentialFunction::new(1.0, 1.0);
    let xs = [0.0, 1.0, 2.0];
    let ys: Vec<f64> = xs.iter().map(|&x| f64::exp(x)).collect();
    assert_relative_eq!(e.r_squared(&xs, &ys).unwrap(), 1.0);
    assert!(e
        .r2_report(&xs, &ys)
        .unwrap()
        .starts_with("The r^2 value of the exponential is"));
}

#[test]
fn r_squared_rejects_constant_samples() {
    let p = Polynomial::from(vec![1.0]);
    assert_eq!(
        p.r_squared(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]),
        Err(FitError::DegenerateFit)
    );
}

#[test]
fn r_squared_rejects_bad_lengths() {
    let e = ExponentialFunction::new(1.0, 0.0);
    assert_eq!(
        e.r_squared(&[1.0, 2.0], &[1.0]),
        Err(FitError::LengthMismatch { xs: 2, ys: 1 })
    );
    assert_eq!(e.r_squared(&[], &[]), Err(FitError::EmptySamples));
}

#[test]
fn models_are_interchangeable_behind_trait() {
    let models: Vec<Box<dyn FitModel>> = vec![
        Box::new(Polynomial::from(vec![1.0, 0.0])),
        Box::new(ExponentialFunction::new(1.0, 0.0)),
    ];
    let names: Vec<&str> = models.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["polynomial", "exponential"]);
    assert_eq!(models[1].evaluate(42.0), 1.0);
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

#[test]
fn interpolate_recovers_quadratic() {
    // 2x^2 - 3x + 1
    let truth = Polynomial::from(vec![2.0, -3.0, 1.0]);
    let xs = [1.0, 2.0, 3.0];
    let ys: Vec<f64> = xs.iter().map(|&x| truth.evaluate(x)).collect();

    let config = EliminationConfig::default().with_zero_correction();
    let fitted = interpolate(&xs, &ys, 2, &config).unwrap();
    assert_eq!(fitted.degree(), 2);
    for (got, want) in fitted.coefficients().iter().zip(truth.coefficients()) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn interpolate_uses_first_samples_only() {
    let xs = [0.0, 1.0, 5.0];
    let ys = [1.0, 3.0, 100.0];
    let line = interpolate(&xs, &ys, 1, &EliminationConfig::default()).unwrap();
    assert_relative_eq!(line.coefficient(1), 2.0, epsilon = 1e-12);
    assert_relative_eq!(line.coefficient(0), 1.0, epsilon = 1e-12);
}

#[test]
fn interpolate_reports_errors() {
    let config = EliminationConfig::default();
    assert_eq!(
        interpolate(&[1.0, 2.0], &[1.0, 2.0], 2, &config),
        Err(FitError::InsufficientSamples {
            degree: 2,
            needed: 3,
            got: 2
        })
    );
    assert!(matches!(
        interpolate(&[1.0, 1.0], &[2.0, 3.0], 1, &config),
        Err(FitError::Matrix(_))
    ));
    assert!(matches!(
        interpolate(&[1.0], &[1.0, 2.0], 0, &config),
        Err(FitError::LengthMismatch { .. })
    ));
}
