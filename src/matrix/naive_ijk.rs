use super::Matrix;
use crate::Error;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation: one dot product per
/// output cell, walking `right` column-wise. Use it as a correctness
/// baseline, not for performance.
///
/// Arithmetic wraps on overflow, same as [`crate::multiply`].
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `left.cols() != right.rows()`.
pub fn matmul_naive_ijk(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    if left.cols() != right.rows() {
        return Err(Error::mismatch(left.shape(), right.shape()));
    }

    let (m, k) = left.shape();
    let n = right.cols();
    let a = left.as_slice();
    let b = right.as_slice();

    let mut out = Matrix::zeros(m, n);
    let c = out.as_mut_slice();
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0i64;
            for p in 0..k {
                sum = sum.wrapping_add(a[i * k + p].wrapping_mul(b[p * n + j]));
            }
            c[i * n + j] = sum;
        }
    }
    Ok(out)
}
