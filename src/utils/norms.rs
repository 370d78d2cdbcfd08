//! Entrywise magnitude helpers for residual and orthogonality checks.
//!
//! Generic over [`MatShape`] + [`MatrixGet`], so dense, diagonal and faer matrices mix freely.

use crate::core::traits::{MatShape, MatrixGet};
use crate::matrix::Matrix;
use num_traits::Float;

/// Largest entry magnitude, `max |a_ij|`.
pub fn max_abs<T: Float, A: MatShape + MatrixGet<T>>(a: &A) -> T {
    let mut mx = T::zero();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            mx = mx.max(a.get(i, j).abs());
        }
    }
    mx
}

/// `max |a_ij - b_ij|`.
///
/// # Panics
/// If the shapes differ.
pub fn max_abs_diff<T, A, B>(a: &A, b: &B) -> T
where
    T: Float,
    A: MatShape + MatrixGet<T>,
    B: MatShape + MatrixGet<T>,
{
    assert_eq!(a.nrows(), b.nrows(), "Row counts do not agree");
    assert_eq!(a.ncols(), b.ncols(), "Column counts do not agree");
    let mut mx = T::zero();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            mx = mx.max((a.get(i, j) - b.get(i, j)).abs());
        }
    }
    mx
}

/// Largest superdiagonal magnitude `max |a_{k,k+1}|` over the leading square block.
pub fn max_superdiagonal<T: Float, A: MatShape + MatrixGet<T>>(a: &A) -> T {
    let n = a.nrows().min(a.ncols());
    (1..n).fold(T::zero(), |mx, k| mx.max(a.get(k - 1, k).abs()))
}

/// `max |Q Q^T - I|` for a square `q`.
pub fn orthogonality_error<T: Float>(q: &Matrix<T>) -> T {
    let qqt = q * &q.transpose();
    max_abs_diff(&qqt, &Matrix::identity(q.nrows()))
}
