//! redeem-matrix: dense `f64` matrices for small linear-algebra tasks.
//!
//! The crate provides a single value type, [`Matrix`], with dimension-checked
//! arithmetic, tolerance-based equality, transpose, determinant via Laplace
//! expansion, cofactor matrices, and inversion through the adjugate.
//!
//! Fallible operations return [`MatrixError`] and never leave a partially
//! modified receiver behind. Logging goes through the `log` facade; install a
//! logger such as `env_logger` in the host program to see it.
//!
//! ```
//! use redeem_matrix::Matrix;
//!
//! let a = Matrix::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]])?;
//! let inv = a.inverse()?;
//! assert_eq!(&a * &inv, Matrix::identity(2)?);
//! # Ok::<(), redeem_matrix::MatrixError>(())
//! ```
pub mod error;
pub mod math;

pub use crate::error::MatrixError;
pub use crate::math::{Matrix, EPSILON};
