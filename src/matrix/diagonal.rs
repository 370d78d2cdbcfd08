//! Compact diagonal matrix.
//!
//! Stores only the `min(nrows, ncols)` diagonal values of an `nrows x ncols` matrix; every
//! off-diagonal position reads as zero.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::SingularError;
use crate::matrix::Matrix;
use num_traits::Float;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct DiagonalMatrix<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
}

impl<T: Float> DiagonalMatrix<T> {
    /// Zero `nrows x ncols` diagonal matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, values: vec![T::zero(); nrows.min(ncols)] }
    }

    /// Diagonal matrix with the given diagonal values.
    ///
    /// # Errors
    /// `DimensionMismatch` if `values.len() != min(nrows, ncols)`.
    pub fn from_values(nrows: usize, ncols: usize, values: &[T]) -> Result<Self, SingularError> {
        let len = nrows.min(ncols);
        if values.len() != len {
            return Err(SingularError::DimensionMismatch {
                expected: format!("{} diagonal values", len),
                found: format!("{} diagonal values", values.len()),
            });
        }
        Ok(Self { nrows, ncols, values: values.to_vec() })
    }

    /// Take the main diagonal of a dense matrix, dropping everything else.
    pub fn from_dense_diagonal(m: &Matrix<T>) -> Self {
        let len = m.nrows().min(m.ncols());
        Self { nrows: m.nrows(), ncols: m.ncols(), values: (0..len).map(|i| m[(i, i)]).collect() }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Stored diagonal, `min(nrows, ncols)` values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Element at `(i, j)`; zero off the diagonal.
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of range", i, j);
        if i == j { self.values[i] } else { T::zero() }
    }

    pub fn transpose(&self) -> Self {
        Self { nrows: self.ncols, ncols: self.nrows, values: self.values.clone() }
    }

    /// Expand into a dense `nrows x ncols` matrix.
    pub fn to_dense(&self) -> Matrix<T> {
        let mut m = Matrix::zeros(self.nrows, self.ncols);
        for (i, &x) in self.values.iter().enumerate() {
            m[(i, i)] = x;
        }
        m
    }
}

impl<T: Float> MatrixGet<T> for DiagonalMatrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        DiagonalMatrix::get(self, i, j)
    }
}

impl<T> MatShape for DiagonalMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Float + fmt::Display> fmt::Display for DiagonalMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dense())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_diagonal_reads_zero() {
        let d = DiagonalMatrix::from_values(2, 3, &[4.0, 5.0]).unwrap();
        assert_eq!(d.get(0, 0), 4.0);
        assert_eq!(d.get(1, 1), 5.0);
        assert_eq!(d.get(0, 2), 0.0);
        assert_eq!(d.get(1, 0), 0.0);
    }

    #[test]
    fn from_values_checks_length() {
        assert!(DiagonalMatrix::<f64>::from_values(3, 2, &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn transpose_swaps_shape() {
        let d = DiagonalMatrix::from_values(3, 2, &[1.0, 2.0]).unwrap().transpose();
        assert_eq!((d.nrows(), d.ncols()), (2, 3));
        assert_eq!(d.to_dense().as_slice(), &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    }
}
