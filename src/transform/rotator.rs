//! Givens rotator.
//!
//! A rotator built from `(x1, x2)` is the 2x2 matrix
//!
//! ```text
//! Q = | c  -s |      c = x1 / sqrt(x1^2 + x2^2)
//!     | s   c |      s = x2 / sqrt(x1^2 + x2^2)
//! ```
//!
//! so that `Q^T [x1 x2]^T = [r 0]^T`. Applied at offset `k` it acts as the identity everywhere
//! except rows (or columns) `k` and `k + 1`.

use crate::error::SingularError;
use crate::matrix::Matrix;
use num_traits::Float;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotator<T> {
    cs: T,
    sn: T,
}

impl<T: Float> Rotator<T> {
    /// Build the rotator that zeroes `x2` against `x1`.
    ///
    /// Both inputs zero gives the identity rotation.
    pub fn new(x1: T, x2: T) -> Self {
        let mx = x1.abs().max(x2.abs());
        if mx == T::zero() {
            return Self { cs: T::one(), sn: T::zero() };
        }
        let (x1, x2) = (x1 / mx, x2 / mx);
        let norm = (x1 * x1 + x2 * x2).sqrt();
        Self { cs: x1 / norm, sn: x2 / norm }
    }

    pub fn cos(&self) -> T {
        self.cs
    }

    pub fn sin(&self) -> T {
        self.sn
    }

    /// Element `(i, j)` of `Q`.
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < 2 && j < 2, "rotator index ({}, {}) out of range", i, j);
        match (i, j) {
            (0, 0) | (1, 1) => self.cs,
            (0, _) => -self.sn,
            _ => self.sn,
        }
    }

    /// Return `Q^T` applied to rows `k` and `k + 1` of `m`.
    ///
    /// # Errors
    /// `RotationOutOfRange` if `m` has fewer than `k + 2` rows.
    pub fn apply_from_left_to(&self, m: &Matrix<T>, k: usize) -> Result<Matrix<T>, SingularError> {
        if k + 2 > m.nrows() {
            return Err(SingularError::RotationOutOfRange { offset: k, dim: m.nrows() });
        }
        let mut out = m.clone();
        for c in 0..m.ncols() {
            let x1 = m[(k, c)];
            let x2 = m[(k + 1, c)];
            out[(k, c)] = self.cs * x1 + self.sn * x2;
            out[(k + 1, c)] = -self.sn * x1 + self.cs * x2;
        }
        Ok(out)
    }

    /// Return `Q` applied to columns `k` and `k + 1` of `m`.
    ///
    /// # Errors
    /// `RotationOutOfRange` if `m` has fewer than `k + 2` columns.
    pub fn apply_from_right_to(&self, m: &Matrix<T>, k: usize) -> Result<Matrix<T>, SingularError> {
        if k + 2 > m.ncols() {
            return Err(SingularError::RotationOutOfRange { offset: k, dim: m.ncols() });
        }
        let mut out = m.clone();
        for r in 0..m.nrows() {
            let x1 = m[(r, k)];
            let x2 = m[(r, k + 1)];
            out[(r, k)] = x1 * self.cs + x2 * self.sn;
            out[(r, k + 1)] = -x1 * self.sn + x2 * self.cs;
        }
        Ok(out)
    }
}
