//! Dense matrix type and the linear algebra built on it.
//!
//! `Matrix` keeps its cells in a single row-major `Vec<f64>`; arithmetic lives
//! in `ops` and the determinant/inverse machinery in `linalg`.
pub mod linalg;
pub mod matrix;
pub mod ops;

pub use matrix::{Matrix, EPSILON};
