//! Cell-wise and matrix-product arithmetic.
//!
//! The in-place methods and the `checked_*` variants report shape problems as
//! [`MatrixError::DimensionMismatch`] and leave the receiver untouched. The
//! operator overloads cannot return a `Result`, so they panic with the same
//! error message instead, like slice indexing does.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::matrix::Matrix;
use crate::error::MatrixError;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    /// Add `other` cell by cell.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);
        Ok(())
    }

    /// Subtract `other` cell by cell.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);
        Ok(())
    }

    /// Multiply every cell by `scalar`.
    pub fn scale(&mut self, scalar: f64) {
        self.data.iter_mut().for_each(|v| *v *= scalar);
    }

    /// Replace `self` with the product `self * other`.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        *self = self.checked_mul(other)?;
        Ok(())
    }

    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        result.add_matrix(other)?;
        Ok(result)
    }

    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(other)?;
        let mut result = self.clone();
        result.sub_matrix(other)?;
        Ok(result)
    }

    /// Matrix product. `other` must have as many rows as `self` has columns.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.cols, other.cols),
                actual: other.shape(),
            });
        }

        let mut result = Matrix::zeroed(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                result.data[i * other.cols + j] = sum;
            }
        }
        Ok(result)
    }
}

impl<'a> AddAssign<&'a Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &'a Matrix) {
        if let Err(err) = self.add_matrix(rhs) {
            panic!("{}", err);
        }
    }
}

impl AddAssign<Matrix> for Matrix {
    fn add_assign(&mut self, rhs: Matrix) {
        *self += &rhs;
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<'b> Add<&'b Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &'b Matrix) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: Matrix) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<'a> SubAssign<&'a Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &'a Matrix) {
        if let Err(err) = self.sub_matrix(rhs) {
            panic!("{}", err);
        }
    }
}

impl SubAssign<Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: Matrix) {
        *self -= &rhs;
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl<'b> Sub<&'b Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &'b Matrix) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: Matrix) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl<'a> MulAssign<&'a Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &'a Matrix) {
        if let Err(err) = self.mul_matrix(rhs) {
            panic!("{}", err);
        }
    }
}

impl MulAssign<Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: Matrix) {
        *self *= &rhs;
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'b> Mul<&'b Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        &self * rhs
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut result = self.clone();
        result.scale(rhs);
        result
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

impl<'b> Mul<&'b Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        rhs * self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        rhs * self
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}
