//! Multi-threaded multiplication over disjoint row blocks.

use super::partition::{RowRange, plan};
use crate::Error;
use crate::matrix::Matrix;
use crate::matrix::naive_ikj::matmul_ikj_rows;
use std::panic;
use std::thread;
use tracing::{debug, trace};

/// Multiplies `left × right`, splitting output rows across `num_threads`
/// scoped worker threads.
///
/// The output buffer is cut with `split_at_mut` along the planned row
/// boundaries, so each worker holds the only `&mut` to its rows and the
/// result needs no lock. `left` and `right` are shared read-only.
/// All workers are joined before this returns; if one panicked, the
/// panic is resumed on the calling thread.
///
/// `num_threads <= 1` runs on the calling thread.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `left.cols() != right.rows()`.
/// Nothing is allocated or spawned in that case.
pub fn matmul_rows_mt(left: &Matrix, right: &Matrix, num_threads: usize) -> Result<Matrix, Error> {
    if left.cols() != right.rows() {
        return Err(Error::mismatch(left.shape(), right.shape()));
    }

    let m = left.rows();
    let n = right.cols();

    if num_threads <= 1 {
        debug!(m, k = left.cols(), n, "multiplying on calling thread");
        let mut out = Matrix::zeros(m, n);
        matmul_ikj_rows(left, right, RowRange { start: 0, end: m }, out.as_mut_slice());
        return Ok(out);
    }

    let ranges = plan(m, num_threads);
    debug!(
        m,
        k = left.cols(),
        n,
        requested = num_threads,
        workers = ranges.len(),
        "multiplying across worker threads"
    );

    let mut out = Matrix::zeros(m, n);
    run_row_blocks(left, right, &ranges, out.as_mut_slice());
    Ok(out)
}

/// Spawns one scoped worker per range, each writing only its own block of
/// `out`, and joins all of them.
///
/// `ranges` must be ordered and contiguous from row 0, and `out` must hold
/// exactly those rows. A worker panic is resumed here once every worker
/// has been joined, so no thread outlives the call.
fn run_row_blocks(left: &Matrix, right: &Matrix, ranges: &[RowRange], out: &mut [i64]) {
    let n = right.cols();
    let mut rest = out;

    thread::scope(|s| {
        let handles: Vec<_> = ranges
            .iter()
            .map(|&range| {
                let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * n);
                rest = tail;

                s.spawn(move || {
                    trace!(%range, "worker started");
                    matmul_ikj_rows(left, right, range, block);
                })
            })
            .collect();

        let mut first_panic = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                if first_panic.is_none() {
                    first_panic = Some(payload);
                }
            }
        }
        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    fn patterned(rows: usize, cols: usize, modulo: usize) -> Matrix {
        let data = (0..rows * cols)
            .map(|i| (i % modulo) as i64 - (modulo / 2) as i64)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn test_rows_mt_correctness() {
        let (m, n, k) = (37, 23, 19);
        let a = patterned(m, k, 17);
        let b = patterned(k, n, 13);

        let expected = matmul_naive_ijk(&a, &b).unwrap();
        for threads in [0, 1, 2, 3, 4, 7, 16, 37, 64] {
            let c = matmul_rows_mt(&a, &b, threads).unwrap();
            assert_eq!(c, expected, "threads={}", threads);
        }
    }

    #[test]
    fn test_rows_mt_mismatch_before_dispatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert_eq!(
            matmul_rows_mt(&a, &b, 4).unwrap_err(),
            Error::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 2
            }
        );
    }

    #[test]
    fn test_rows_mt_zero_columns() {
        let a = Matrix::zeros(5, 3);
        let b = Matrix::zeros(3, 0);
        let c = matmul_rows_mt(&a, &b, 4).unwrap();
        assert_eq!(c.shape(), (5, 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_worker_panic_reaches_caller() {
        // range past the last row of `a`: the second worker panics in
        // `Matrix::row` while the first completes normally
        let a = Matrix::identity(2);
        let b = Matrix::identity(2);
        let ranges = [RowRange { start: 0, end: 2 }, RowRange { start: 2, end: 3 }];
        let mut out = vec![0; 3 * 2];
        run_row_blocks(&a, &b, &ranges, &mut out);
    }
}
