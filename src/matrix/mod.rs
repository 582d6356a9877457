//! Dense integer matrix and the scalar kernels that operate on it.
//!
//! `Matrix` stores its elements row-major in a single buffer, so a block
//! of consecutive rows is a contiguous slice. The threaded multiplier
//! relies on that to hand each worker its own `&mut` slice of output rows.

pub mod naive_ijk;
pub mod naive_ikj;

use crate::Error;
use std::fmt;

/// Rectangular row-major matrix of `i64`.
///
/// Zero rows and/or zero columns are valid shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// All-zero `rows × cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("{}x{} matrix: element count overflows usize", rows, cols);
        };
        Self {
            rows,
            cols,
            data: vec![0; len],
        }
    }

    /// `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Wraps a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != rows * cols`, or if
    /// `rows * cols` overflows `usize`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self, Error> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::BufferSize {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from nested rows.
    ///
    /// The column count is taken from the first row; an empty `Vec` gives
    /// a 0×0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] for the first row whose length differs.
    ///
    /// # Example
    ///
    /// ```
    /// use matmul_threads::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 2), 6);
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        let n = rows.len();
        let capacity = n.checked_mul(cols).ok_or(Error::BufferSize {
            rows: n,
            cols,
            len: 0,
        })?;
        let mut data = Vec::with_capacity(capacity);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n,
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        self.data[i * self.cols + j]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The row-major element buffer.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Method form of [`crate::multiply`].
    pub fn multiply(&self, rhs: &Matrix, workers: usize) -> Result<Matrix, Error> {
        crate::multiply(self, rhs, workers)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row = self.row(i);
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
