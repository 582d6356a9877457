use super::Matrix;
use crate::threaded::partition::RowRange;

/// Cache-friendly i-k-j multiplication over a block of output rows.
///
/// Computes rows `range.start..range.end` of `left × right` and writes
/// them into `out`, which holds exactly those rows (row-major,
/// `range.len() * right.cols()` elements). The innermost loop walks both
/// `right` and `out` with stride 1.
///
/// `out` is overwritten, not accumulated into. Arithmetic wraps on
/// overflow.
///
/// Shapes are the caller's responsibility: `left.cols() == right.rows()`
/// and `range.end <= left.rows()`.
pub fn matmul_ikj_rows(left: &Matrix, right: &Matrix, range: RowRange, out: &mut [i64]) {
    let k = left.cols();
    let n = right.cols();
    debug_assert_eq!(out.len(), range.len() * n);

    let b = right.as_slice();
    out.fill(0);

    for (local, i) in (range.start..range.end).enumerate() {
        let a_row = left.row(i);
        let c_row = &mut out[local * n..(local + 1) * n];
        for p in 0..k {
            let a_ip = a_row[p];
            if a_ip == 0 {
                continue;
            }
            let b_row = &b[p * n..(p + 1) * n];
            for (c, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c = c.wrapping_add(a_ip.wrapping_mul(b_pj));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::matmul_naive_ijk;

    #[test]
    fn test_ikj_rows_matches_ijk() {
        let (m, n, k) = (7, 5, 6);
        let a = Matrix::from_vec(m, k, (0..m * k).map(|i| (i % 10) as i64 - 4).collect()).unwrap();
        let b = Matrix::from_vec(k, n, (0..k * n).map(|i| (i % 7) as i64 - 3).collect()).unwrap();

        let expected = matmul_naive_ijk(&a, &b).unwrap();

        let range = RowRange { start: 2, end: 5 };
        let mut out = vec![99; range.len() * n];
        matmul_ikj_rows(&a, &b, range, &mut out);

        assert_eq!(&out[..], &expected.as_slice()[2 * n..5 * n]);
    }

    #[test]
    fn test_ikj_rows_empty_range() {
        let a = Matrix::identity(3);
        let mut out: Vec<i64> = Vec::new();
        matmul_ikj_rows(&a, &a, RowRange { start: 1, end: 1 }, &mut out);
        assert!(out.is_empty());
    }
}
