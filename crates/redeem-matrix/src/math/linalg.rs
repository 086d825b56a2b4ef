//! Transpose, determinant, cofactors, and inverse.
//!
//! Determinants use Laplace expansion along the first row, so the cost grows
//! factorially with the matrix size. That is fine for the small systems this
//! crate is meant for and nothing else.

use super::matrix::{Matrix, EPSILON};
use crate::error::MatrixError;

fn alternating_sign(index: usize) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix {
    fn check_square(&self) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::InvalidDimensions {
                rows: self.rows,
                columns: self.cols,
            });
        }
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                columns: self.cols,
            });
        }
        Ok(())
    }

    /// Swap rows and columns: `result[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeroed(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// Submatrix with `row` and `column` removed.
    pub(crate) fn minor(&self, row: usize, column: usize) -> Matrix {
        debug_assert!(
            row < self.rows && column < self.cols,
            "minor ({}, {}) of {}x{} matrix",
            row,
            column,
            self.rows,
            self.cols
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            data.extend(
                self.row_slice(i)
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != column)
                    .map(|(_, v)| *v),
            );
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.check_square()?;
        Ok(self.expand_determinant())
    }

    // Square input only. The 0x0 determinant is 1, which makes the cofactor of
    // a 1x1 matrix come out as [[1]].
    fn expand_determinant(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => {
                log::trace!("laplace expansion of {}x{} determinant", n, n);
                (0..n)
                    .map(|j| {
                        alternating_sign(j) * self.data[j] * self.minor(0, j).expand_determinant()
                    })
                    .sum()
            }
        }
    }

    /// Matrix of signed minors: `(-1)^(i+j) * det(minor(i, j))`.
    pub fn cofactor_matrix(&self) -> Result<Matrix, MatrixError> {
        self.check_square()?;
        let mut result = Matrix::zeroed(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[i * self.cols + j] =
                    alternating_sign(i + j) * self.minor(i, j).expand_determinant();
            }
        }
        Ok(result)
    }

    /// Inverse through the adjugate, `cofactor_matrix().transpose() / det`.
    ///
    /// Fails with [`MatrixError::SingularMatrix`] when `|det| <= EPSILON`.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let determinant = self.determinant()?;
        if determinant.abs() <= EPSILON {
            log::debug!(
                "refusing to invert singular {}x{} matrix (determinant {:e})",
                self.rows,
                self.cols,
                determinant
            );
            return Err(MatrixError::SingularMatrix { determinant });
        }
        log::debug!(
            "inverting {}x{} matrix with determinant {}",
            self.rows,
            self.cols,
            determinant
        );
        Ok(self.cofactor_matrix()?.transpose() * (1.0 / determinant))
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<f64, MatrixError> {
        self.check_square()?;
        Ok((0..self.rows).map(|i| self.data[i * self.cols + i]).sum())
    }
}
