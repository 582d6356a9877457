//! Error types for matrix construction and multiplication.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `left.cols() != right.rows()`.
    #[error(
        "matrix dimension mismatch: A is {left_rows}x{left_cols}, B is {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A row passed to `Matrix::from_rows` differs in length from the first row.
    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// `Matrix::from_vec` got a buffer whose length is not `rows * cols`,
    /// or `rows * cols` overflows `usize`.
    #[error("buffer of {len} elements does not hold a {rows}x{cols} matrix")]
    BufferSize { rows: usize, cols: usize, len: usize },
}

impl Error {
    pub(crate) fn mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Error::DimensionMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}
