use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction, access, and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A dimension was zero where a positive value is required.
    InvalidDimensions { rows: usize, columns: usize },
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    NotSquare { rows: usize, columns: usize },
    /// The determinant is within tolerance of zero.
    SingularMatrix { determinant: f64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, columns } => write!(
                f,
                "invalid dimensions {}x{}: rows and columns must be positive",
                rows, columns
            ),
            MatrixError::IndexOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, column, rows, columns
            ),
            MatrixError::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            MatrixError::NotSquare { rows, columns } => {
                write!(f, "matrix is not square ({}x{})", rows, columns)
            }
            MatrixError::SingularMatrix { determinant } => write!(
                f,
                "matrix is singular (determinant {:e})",
                determinant
            ),
        }
    }
}

impl Error for MatrixError {}
