//! Multi-threaded integer matrix multiplication, built from scratch.
//!
//! The product is split by output rows: each worker thread gets a
//! contiguous block of rows and writes them into its own slice of the
//! result. No locks, no shared mutable state, no persistent thread pool.
//! Threads live for one call and are joined before it returns.
//!
//! ## Usage
//!
//! ```
//! use matmul_threads::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![7, 8, 9], vec![10, 11, 12]]).unwrap();
//!
//! let c = multiply(&a, &b, 2).unwrap();
//! assert_eq!(
//!     c.to_rows(),
//!     vec![vec![27, 30, 33], vec![61, 68, 75], vec![95, 106, 117]]
//! );
//! ```
//!
//! A worker count of 0 or 1 runs on the calling thread. Mismatched shapes
//! are rejected up front:
//!
//! ```
//! use matmul_threads::{multiply, Error, Matrix};
//!
//! let a = Matrix::zeros(2, 3);
//! let b = Matrix::zeros(2, 2);
//! assert!(matches!(multiply(&a, &b, 4), Err(Error::DimensionMismatch { .. })));
//! ```
//!
//! ## What's inside
//!
//! - Row-major `Matrix` with validated construction
//! - Row partition planner (remainder rows go to the last worker)
//! - i-k-j row kernel with wrapping `i64` arithmetic
//! - i-j-k reference kernel for correctness checks
//! - `matmul-bench` binary for timing sizes × thread counts

mod error;
pub mod matrix;
pub mod threaded;

pub use error::Error;
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use threaded::partition::{RowRange, plan};

/// Matrix multiply: returns `left × right`.
///
/// `left` is m×k, `right` is k×n, the result is m×n. With `workers >= 2`
/// the rows of the result are computed on up to `workers` threads; with 0
/// or 1 everything runs on the calling thread. The result is the same
/// either way. Arithmetic wraps on `i64` overflow.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `left.cols() != right.rows()`.
///
/// # Panics
///
/// Panics if `left.rows() * right.cols()` overflows `usize`.
pub fn multiply(left: &Matrix, right: &Matrix, workers: usize) -> Result<Matrix, Error> {
    threaded::row_split::matmul_rows_mt(left, right, workers)
}

/// Same as [`multiply`] but always on the calling thread.
pub fn multiply_sequential(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    threaded::row_split::matmul_rows_mt(left, right, 1)
}
