//! Integration tests for transpose, determinant, cofactors, and inversion.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redeem_matrix::{Matrix, MatrixError, EPSILON};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.gen_range(-5.0..5.0)).collect();
    Matrix::from_shape_vec((rows, cols), data).unwrap()
}

fn m(rows: &[&[f64]]) -> Matrix {
    let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    Matrix::from_rows(&rows).unwrap()
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_shape_and_cells() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
    // receiver untouched
    assert_eq!(a.shape(), (2, 3));
}

#[test]
fn double_transpose_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    for (rows, cols) in [(1, 1), (1, 4), (3, 2), (5, 5)] {
        let a = random_matrix(&mut rng, rows, cols);
        assert_eq!(a.transpose().transpose(), a);
    }
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

#[test]
fn determinant_of_two_by_two() -> Result<()> {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(a.determinant()?, -2.0);
    Ok(())
}

#[test]
fn determinant_of_one_by_one() -> Result<()> {
    assert_eq!(m(&[&[-3.5]]).determinant()?, -3.5);
    Ok(())
}

#[test]
fn determinant_by_laplace_expansion() -> Result<()> {
    init_logging();
    let a = m(&[&[2.0, -3.0, 1.0], &[2.0, 0.0, -1.0], &[1.0, 4.0, 5.0]]);
    assert!((a.determinant()? - 49.0).abs() < 1e-9);

    let b = m(&[
        &[1.0, 0.0, 2.0, -1.0],
        &[3.0, 0.0, 0.0, 5.0],
        &[2.0, 1.0, 4.0, -3.0],
        &[1.0, 0.0, 5.0, 0.0],
    ]);
    assert!((b.determinant()? - 30.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn determinant_of_identity_is_one() -> Result<()> {
    for n in 1..=5 {
        assert_eq!(Matrix::identity(n)?.determinant()?, 1.0);
    }
    Ok(())
}

#[test]
fn determinant_with_zero_row_is_zero() -> Result<()> {
    let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[7.0, 8.0, 9.0]]);
    assert_eq!(a.determinant()?, 0.0);
    Ok(())
}

#[test]
fn determinant_of_non_square_errors() {
    let a = Matrix::new(2, 3).unwrap();
    assert_eq!(
        a.determinant().unwrap_err(),
        MatrixError::NotSquare { rows: 2, columns: 3 }
    );
    assert!(a.trace().is_err());
}

#[test]
fn trace_sums_diagonal() -> Result<()> {
    let a = m(&[&[1.0, 9.0], &[9.0, 4.0]]);
    assert_eq!(a.trace()?, 5.0);
    Ok(())
}

// ---------------------------------------------------------------------------
// Cofactor matrix
// ---------------------------------------------------------------------------

#[test]
fn cofactor_matrix_of_three_by_three() -> Result<()> {
    let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 2.0], &[5.0, 2.0, 1.0]]);
    let expected = m(&[
        &[0.0, 10.0, -20.0],
        &[4.0, -14.0, 8.0],
        &[-8.0, -2.0, 4.0],
    ]);
    assert_eq!(a.cofactor_matrix()?, expected);
    Ok(())
}

#[test]
fn cofactor_matrix_of_two_by_two() -> Result<()> {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(a.cofactor_matrix()?, m(&[&[4.0, -3.0], &[-2.0, 1.0]]));
    Ok(())
}

#[test]
fn cofactor_matrix_of_one_by_one_is_unit() -> Result<()> {
    assert_eq!(m(&[&[8.0]]).cofactor_matrix()?, m(&[&[1.0]]));
    Ok(())
}

#[test]
fn cofactor_matrix_of_non_square_errors() {
    let a = Matrix::new(3, 2).unwrap();
    assert!(matches!(
        a.cofactor_matrix(),
        Err(MatrixError::NotSquare { rows: 3, columns: 2 })
    ));
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

#[test]
fn inverse_of_three_by_three() -> Result<()> {
    init_logging();
    let a = m(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
    let expected = m(&[
        &[1.0, -1.0, 1.0],
        &[-38.0, 41.0, -34.0],
        &[27.0, -29.0, 24.0],
    ]);
    assert_eq!(a.inverse()?, expected);
    Ok(())
}

#[test]
fn inverse_of_one_by_one() -> Result<()> {
    assert_eq!(m(&[&[4.0]]).inverse()?, m(&[&[0.25]]));
    Ok(())
}

#[test]
fn product_with_inverse_is_identity() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut checked = 0;
    while checked < 10 {
        let n = 2 + checked % 3;
        let a = random_matrix(&mut rng, n, n);
        if a.determinant()?.abs() < 1.0 {
            continue;
        }
        let identity = Matrix::identity(n)?;
        assert_eq!(&a * &a.inverse()?, identity);
        assert_eq!(&a.inverse()? * &a, identity);
        checked += 1;
    }
    Ok(())
}

#[test]
fn inverse_of_singular_matrix_errors() {
    init_logging();
    let a = m(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[4.0, 5.0, 6.0]]);
    assert!(matches!(
        a.inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));

    // linearly dependent rows
    let b = m(&[&[1.0, 2.0], &[2.0, 4.0]]);
    assert!(matches!(
        b.inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));
}

#[test]
fn singularity_threshold_is_inclusive() -> Result<()> {
    // determinant below the tolerance
    assert!(matches!(
        m(&[&[1e-8, 0.0], &[0.0, 1.0]]).inverse(),
        Err(MatrixError::SingularMatrix { .. })
    ));

    // determinant exactly at the tolerance is still singular
    let at_threshold = m(&[&[EPSILON, 0.0], &[0.0, 1.0]]);
    assert_eq!(at_threshold.determinant()?, EPSILON);
    assert_eq!(
        at_threshold.inverse().unwrap_err(),
        MatrixError::SingularMatrix {
            determinant: EPSILON
        }
    );

    // determinant above the tolerance inverts
    let inv = m(&[&[1e-6, 0.0], &[0.0, 1.0]]).inverse()?;
    assert!((inv[(0, 0)] - 1e6).abs() < 1e-6);
    assert!((inv[(1, 1)] - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn inverse_of_non_square_errors() {
    let a = Matrix::new(2, 3).unwrap();
    assert!(matches!(a.inverse(), Err(MatrixError::NotSquare { .. })));
}
