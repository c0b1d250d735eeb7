//! Integration tests for Gauss-Jordan reduction and inversion.

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use matfit::{EliminationConfig, Matrix, MatrixError, PivotStrategy};

fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).expect("rectangular rows")
}

fn assert_near_identity(m: &Matrix, tolerance: f64) {
    assert!(m.is_square());
    for row in 0..m.rows() {
        for col in 0..m.cols() {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(m[(row, col)], expected, epsilon = tolerance);
        }
    }
}

// ---------------------------------------------------------------------------
// rowreduce
// ---------------------------------------------------------------------------

#[test]
fn rowreduce_wide_system() {
    // 2x + y = 3, x + y = 2  =>  x = 1, y = 1
    let mut m = matrix(vec![vec![2.0, 1.0, 3.0], vec![1.0, 1.0, 2.0]]);
    m.rowreduce();
    assert_eq!(m.row(0), &[1.0, 0.0, 1.0]);
    assert_eq!(m.row(1), &[0.0, 1.0, 1.0]);
}

#[test]
fn rowreduce_is_idempotent() {
    let mut m = matrix(vec![
        vec![2.0, 1.0, -1.0, 8.0],
        vec![-3.0, -1.0, 2.0, -11.0],
        vec![-2.0, 1.0, 2.0, -3.0],
    ]);
    let config = EliminationConfig::default().with_zero_correction();
    m.rowreduce_with(&config);
    let once = m.clone();
    m.rowreduce_with(&config);
    assert_eq!(m, once);

    // x = 2, y = 3, z = -1
    assert_abs_diff_eq!(once[(0, 3)], 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(once[(1, 3)], 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(once[(2, 3)], -1.0, epsilon = 1e-9);
}

#[test]
fn rowreduce_tall_matrix_reduces_min_dimension() {
    let mut m = matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0], vec![0.0, 0.0]]);
    m.rowreduce();
    assert_eq!(m.row(0), &[1.0, 0.0]);
    assert_eq!(m.row(1), &[0.0, 1.0]);
    assert_eq!(m.row(2), &[0.0, 0.0]);
}

#[test]
fn rowreduce_skips_zero_column_without_dividing() {
    let mut m = matrix(vec![vec![0.0, 2.0], vec![0.0, 4.0]]);
    m.rowreduce();
    assert!(m.as_slice().iter().all(|v| v.is_finite()));
    assert_eq!(m[(0, 0)], 0.0);
    assert_eq!(m[(1, 0)], 0.0);
}

#[test]
fn rowreduce_swaps_row_zero_into_empty_column() {
    let mut m = matrix(vec![vec![1.0, 0.0, 2.0], vec![0.0, 0.0, 3.0]]);
    m.rowreduce();
    assert_eq!(m, matrix(vec![vec![0.0, 0.0, 3.0], vec![1.0, 0.0, 2.0]]));
}

#[test]
fn rowreduce_on_identity_changes_nothing() {
    let mut m = Matrix::identity(4);
    m.rowreduce();
    assert_eq!(m, Matrix::identity(4));
}

// ---------------------------------------------------------------------------
// inverse
// ---------------------------------------------------------------------------

#[test]
fn inverse_of_two_by_two() {
    let a = matrix(vec![vec![2.0, 1.0], vec![1.0, 1.0]]);
    let inv = a.inverse().unwrap();
    assert_eq!(inv, matrix(vec![vec![1.0, -1.0], vec![-1.0, 2.0]]));
}

#[test]
fn inverse_needs_row_swap() {
    let a = matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    let inv = a.inverse().unwrap();
    assert_eq!(inv, a);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let a = matrix(vec![
        vec![4.0, 7.0, 2.0],
        vec![3.0, 6.0, 1.0],
        vec![2.0, 5.0, 3.0],
    ]);
    let config = EliminationConfig::default().with_zero_correction();
    let inv = a.inverse_with(&config).unwrap();
    let product = a.multiply_with(&inv, &config).unwrap();
    assert_near_identity(&product, 1e-9);
}

#[test]
fn inverse_of_random_matrices_with_partial_pivoting() {
    let mut rng = StdRng::seed_from_u64(2016);
    let config = EliminationConfig::new(1e-10, PivotStrategy::Partial, true);
    let mut checked = 0;
    for _ in 0..20 {
        let a = Matrix::random(4, 4, true, &mut rng);
        // random draws may be singular; only check the ones that invert
        if let Ok(inv) = a.inverse_with(&config) {
            let product = a.multiply_with(&inv, &config).unwrap();
            assert_near_identity(&product, 1e-6);
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn inverse_of_random_matrices_with_default_config() {
    let mut rng = StdRng::seed_from_u64(1987);
    let config = EliminationConfig::default();
    let trials = 40;
    let mut checked = 0;
    for _ in 0..trials {
        let a = Matrix::random(4, 4, true, &mut rng);
        match a.inverse_with(&config) {
            Ok(inv) => {
                let product = a.multiply(&inv).unwrap();
                assert_near_identity(&product, 1e-6);
                checked += 1;
            }
            Err(err) => assert!(matches!(
                err,
                MatrixError::Singular { .. } | MatrixError::Unreduced { .. }
            )),
        }
    }
    assert!(checked > trials / 2);
}

#[test]
fn inverse_never_returns_unreduced_result() {
    // invertible (det -1), but the default pivot choice pulls an already
    // reduced row back below the diagonal
    let a = matrix(vec![
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0],
    ]);
    assert_eq!(a.inverse(), Err(MatrixError::Unreduced { column: 0 }));

    let config = EliminationConfig {
        pivot_strategy: PivotStrategy::Partial,
        ..EliminationConfig::default()
    };
    let inv = a.inverse_with(&config).unwrap();
    assert_near_identity(&a.multiply(&inv).unwrap(), 1e-12);
}

#[test]
fn inverse_of_singular_matrix_fails() {
    let a = matrix(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
    assert!(matches!(a.inverse(), Err(MatrixError::Singular { .. })));
}

#[test]
fn inverse_of_zero_matrix_fails() {
    let a = Matrix::new(3, 3);
    assert_eq!(a.inverse(), Err(MatrixError::Singular { column: 0 }));
}

#[test]
fn inverse_rejects_non_square() {
    let a = Matrix::new(2, 3);
    assert_eq!(
        a.inverse(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn partial_pivoting_inverts_where_first_nonzero_stalls() {
    // after clearing column 0 the (1, 1) entry is zero and the first
    // nonzero entry of column 1 sits in row 0
    let a = matrix(vec![
        vec![1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 1.0],
    ]);
    let first = a.inverse();
    assert!(matches!(first, Err(MatrixError::Singular { .. })));

    let config = EliminationConfig {
        pivot_strategy: PivotStrategy::Partial,
        ..EliminationConfig::default()
    };
    let inv = a.inverse_with(&config).unwrap();
    let product = a.multiply(&inv).unwrap();
    assert_near_identity(&product, 1e-12);
}

#[test]
fn inverse_leaves_original_untouched() {
    let a = matrix(vec![vec![2.0, 1.0], vec![1.0, 1.0]]);
    let before = a.copy();
    let _ = a.inverse().unwrap();
    assert_eq!(a, before);
}
