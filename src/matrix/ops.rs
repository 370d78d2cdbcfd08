//! Arithmetic operators between dense and diagonal matrices.
//!
//! Operators assert compatible dimensions and panic otherwise; use
//! [`Matrix::checked_mul`] for a fallible product.

use crate::matrix::{DiagonalMatrix, Matrix};
use num_traits::Float;
use std::ops::{Mul, Sub};

impl<T: Float> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(self.ncols(), rhs.nrows(), "Inner dimensions do not agree");
        self.mul_unchecked(rhs)
    }
}

impl<T: Float> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

/// Dense times diagonal: scales the leading columns, zero-pads or truncates the rest.
impl<T: Float> Mul<&DiagonalMatrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &DiagonalMatrix<T>) -> Matrix<T> {
        assert_eq!(self.ncols(), rhs.nrows(), "Inner dimensions do not agree");
        let d = rhs.values();
        Matrix::from_fn(self.nrows(), rhs.ncols(), |i, j| {
            if j < d.len() { self[(i, j)] * d[j] } else { T::zero() }
        })
    }
}

/// Diagonal times dense: scales the leading rows, zero-pads or truncates the rest.
impl<T: Float> Mul<&Matrix<T>> for &DiagonalMatrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(self.ncols(), rhs.nrows(), "Inner dimensions do not agree");
        let d = self.values();
        Matrix::from_fn(self.nrows(), rhs.ncols(), |i, j| {
            if i < d.len() { d[i] * rhs[(i, j)] } else { T::zero() }
        })
    }
}

impl<T: Float> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(self.shape(), rhs.shape(), "Matrix shapes do not agree");
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)] - rhs[(i, j)])
    }
}
