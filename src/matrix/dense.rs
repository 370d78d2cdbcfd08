//! Row-major dense matrix.
//!
//! `Matrix<T>` owns a contiguous `nrows * ncols` block; the element at row `i` and column `j`
//! lives at `data[i * ncols + j]`. The size is fixed at construction. Copies are explicit
//! (`clone`), and every transform in this crate returns a new matrix instead of mutating its
//! argument.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::SingularError;
use crate::matrix::vector::{VectorView, VectorViewMut};
use num_traits::Float;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Zero-filled `nrows x ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, data: vec![T::zero(); nrows * ncols] }
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye.data[i * n + i] = T::one();
        }
        eye
    }

    /// Construct from raw row-major storage.
    ///
    /// # Errors
    /// `DimensionMismatch` if `values.len() != nrows * ncols`.
    pub fn from_row_major(nrows: usize, ncols: usize, values: &[T]) -> Result<Self, SingularError> {
        if values.len() != nrows * ncols {
            return Err(SingularError::DimensionMismatch {
                expected: format!("{} values", nrows * ncols),
                found: format!("{} values", values.len()),
            });
        }
        Ok(Self { nrows, ncols, data: values.to_vec() })
    }

    /// Build element by element from `f(i, j)`.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Overwrite every element from row-major `values`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `values.len() != nrows * ncols`.
    pub fn fill(&mut self, values: &[T]) -> Result<&mut Self, SingularError> {
        if values.len() != self.data.len() {
            return Err(SingularError::DimensionMismatch {
                expected: format!("{} values", self.data.len()),
                found: format!("{} values", values.len()),
            });
        }
        self.data.copy_from_slice(values);
        Ok(self)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }

    /// Row-major backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a view.
    pub fn row(&self, i: usize) -> VectorView<'_, T> {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        VectorView::new(&self.data, i * self.ncols, self.ncols, 1)
    }

    /// Row `i` as a mutable view.
    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        let ncols = self.ncols;
        VectorViewMut::new(&mut self.data, i * ncols, ncols, 1)
    }

    /// Column `j` as a view.
    pub fn column(&self, j: usize) -> VectorView<'_, T> {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        VectorView::new(&self.data, j, self.nrows, self.ncols)
    }

    /// Column `j` as a mutable view.
    pub fn column_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        let (nrows, ncols) = (self.nrows, self.ncols);
        VectorViewMut::new(&mut self.data, j, nrows, ncols)
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Matrix product with a dimension check.
    ///
    /// # Errors
    /// `DimensionMismatch` if `self.ncols() != rhs.nrows()`.
    pub fn checked_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, SingularError> {
        if self.ncols != rhs.nrows {
            return Err(SingularError::shape((self.ncols, rhs.ncols), rhs.shape()));
        }
        Ok(self.mul_unchecked(rhs))
    }

    /// Product kernel shared by [`Matrix::checked_mul`] and the `*` operator; callers check
    /// `self.ncols() == rhs.nrows()`.
    pub(crate) fn mul_unchecked(&self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = Matrix::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            let lhs_row = &self.data[i * self.ncols..(i + 1) * self.ncols];
            for (k, &a) in lhs_row.iter().enumerate() {
                if a == T::zero() {
                    continue;
                }
                let rhs_row = &rhs.data[k * rhs.ncols..(k + 1) * rhs.ncols];
                let out_row = &mut out.data[i * rhs.ncols..(i + 1) * rhs.ncols];
                for (o, &b) in out_row.iter_mut().zip(rhs_row) {
                    *o = *o + a * b;
                }
            }
        }
        out
    }

    /// Reorder rows: row `i` of the result is row `order[i]` of `self`.
    ///
    /// Equivalent to multiplying a permutation matrix from the left.
    ///
    /// # Panics
    /// If `order.len() != nrows` or an index is out of range.
    pub fn shuffle_rows(&self, order: &[usize]) -> Self {
        assert_eq!(order.len(), self.nrows, "Row order has incorrect length");
        Self::from_fn(self.nrows, self.ncols, |i, j| self[(order[i], j)])
    }

    /// Reorder columns: column `j` of the result is column `order[j]` of `self`.
    ///
    /// # Panics
    /// If `order.len() != ncols` or an index is out of range.
    pub fn shuffle_columns(&self, order: &[usize]) -> Self {
        assert_eq!(order.len(), self.ncols, "Column order has incorrect length");
        Self::from_fn(self.nrows, self.ncols, |i, j| self[(i, order[j])])
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of range", i, j);
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.nrows && j < self.ncols, "index ({}, {}) out of range", i, j);
        &mut self.data[i * self.ncols + j]
    }
}

impl<T: Float> MatrixGet<T> for Matrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.nrows {
            let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
