use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

/// Absolute tolerance for cell comparisons and the singularity check.
pub const EPSILON: f64 = 1e-7;

/// Dense `f64` matrix stored as one row-major buffer.
///
/// Every matrix handed out by a constructor or operation has at least one row
/// and one column. The only exception is the empty shell left behind by
/// [`Matrix::take`], which may be reassigned or dropped but holds no cells.
#[derive(Clone, Debug)]
pub struct Matrix {
    pub(super) data: Vec<f64>,
    pub(super) rows: usize,
    pub(super) cols: usize,
}

/// Validate a shape and return its cell count.
fn check_dimensions(rows: usize, columns: usize) -> Result<usize, MatrixError> {
    if rows == 0 || columns == 0 {
        return Err(MatrixError::InvalidDimensions { rows, columns });
    }
    rows
        .checked_mul(columns)
        .ok_or(MatrixError::InvalidDimensions { rows, columns })
}

impl Matrix {
    /// Create a `rows` x `columns` matrix filled with zeros.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        check_dimensions(rows, columns)?;
        Ok(Self::zeroed(rows, columns))
    }

    /// Wrap a row-major buffer of exactly `rows * columns` values.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        let len = check_dimensions(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DimensionMismatch {
                expected: (len, 1),
                actual: (data.len(), 1),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let len = check_dimensions(rows.len(), cols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    expected: (1, cols),
                    actual: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut result = Self::new(size, size)?;
        for i in 0..size {
            result[(i, i)] = 1.0;
        }
        Ok(result)
    }

    /// Zero-filled matrix without the dimension check, for shapes derived
    /// from matrices that already passed it.
    pub(super) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Move the grid out, leaving `self` as an empty 0x0 shell.
    pub fn take(&mut self) -> Matrix {
        std::mem::replace(
            self,
            Matrix {
                data: Vec::new(),
                rows: 0,
                cols: 0,
            },
        )
    }

    /// True only for the shell left behind by [`Matrix::take`].
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Borrow row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`; use [`Matrix::at`] for checked access.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(
            row < self.rows,
            "row {} out of range for {}x{} matrix",
            row,
            self.rows,
            self.cols
        );
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    fn checked_offset(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || column >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.cols,
            });
        }
        Ok(self.offset(row, column))
    }

    /// Read cell `(row, column)`.
    pub fn at(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        let offset = self.checked_offset(row, column)?;
        Ok(self.data[offset])
    }

    /// Mutable handle to cell `(row, column)`.
    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut f64, MatrixError> {
        let offset = self.checked_offset(row, column)?;
        Ok(&mut self.data[offset])
    }

    /// Change the row count, keeping the cells that stay in range and
    /// zero-filling new ones.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        check_dimensions(rows, self.cols)?;
        self.resize(rows, self.cols);
        Ok(())
    }

    /// Change the column count, keeping the cells that stay in range and
    /// zero-filling new ones.
    pub fn set_columns(&mut self, columns: usize) -> Result<(), MatrixError> {
        check_dimensions(self.rows, columns)?;
        self.resize(self.rows, columns);
        Ok(())
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        log::trace!(
            "resizing {}x{} matrix to {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );
        let mut data = vec![0.0; rows * cols];
        let keep_cols = self.cols.min(cols);
        for row in 0..self.rows.min(rows) {
            let start = row * cols;
            data[start..start + keep_cols].copy_from_slice(&self.row_slice(row)[..keep_cols]);
        }
        self.data = data;
        self.rows = rows;
        self.cols = cols;
    }

    /// Shapes match and every cell pair differs by at most [`EPSILON`].
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }

    pub fn approx_eq_eps(&self, other: &Matrix, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Matrix {
    /// A 3x3 zero matrix.
    fn default() -> Self {
        Self::zeroed(3, 3)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of range for {}x{} matrix",
            index,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of range for {}x{} matrix",
            index,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix ({} x {})", self.rows, self.cols)?;
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
