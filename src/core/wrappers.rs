//! Wrappers for faer dense matrix types.
//!
//! This module implements the core access traits for `faer::Mat` and provides conversions
//! between `faer::Mat` and the row-major [`Matrix`] used by the decomposition engine, so that
//! callers already holding faer matrices can decompose them and compare results against them.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{MatShape, MatrixGet};
use crate::matrix::Matrix;
use faer::Mat;
use num_traits::Float;

impl<T: Copy + Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy + Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

/// Copies a faer matrix (column-major) into row-major storage.
impl<T: Float> From<&Mat<T>> for Matrix<T> {
    fn from(m: &Mat<T>) -> Self {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Float> From<Mat<T>> for Matrix<T> {
    fn from(m: Mat<T>) -> Self {
        Matrix::from(&m)
    }
}

impl<T: Float> Matrix<T> {
    /// Copy this matrix into a freshly allocated `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }
}
