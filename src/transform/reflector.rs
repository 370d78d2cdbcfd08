//! Householder reflector.
//!
//! A reflector of size `L` built from a vector `x` of length `N <= L` is the `L x L` matrix
//!
//! ```text
//! | I | 0 |
//! |---+---|
//! | 0 | R |
//! ```
//!
//! where `I` is the `(L-N) x (L-N)` identity and `R = I - gamma * u * u^T` maps `x` onto
//! `[-tau 0 ... 0]`. Only the trailing `N` rows (from the left) or columns (from the right) of
//! a matrix are touched.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §5.1.2

use crate::error::SingularError;
use crate::matrix::{Matrix, VectorView};
use num_traits::Float;
use std::fmt;

#[derive(Clone, Debug)]
pub struct Reflector<T> {
    /// Size `L` of the embedding transform.
    size: usize,
    /// Direction with `u[0] == 1`, or all zeros for the identity.
    u: Vec<T>,
    gamma: T,
}

impl<T: Float> Reflector<T> {
    /// Build a size-`size` reflector from `v`.
    ///
    /// Components are scaled by the largest magnitude first, so very large or very small
    /// inputs neither overflow nor underflow. A zero vector yields the identity (`gamma == 0`).
    ///
    /// # Errors
    /// `EmptyVector` if `v` is empty, `VectorTooLong` if `v.len() > size`.
    pub fn new(size: usize, v: VectorView<'_, T>) -> Result<Self, SingularError> {
        let n = v.len();
        if n == 0 {
            return Err(SingularError::EmptyVector);
        }
        if n > size {
            return Err(SingularError::VectorTooLong { len: n, size });
        }
        let mut u = v.to_vec();
        let mx = u.iter().fold(T::zero(), |acc, x| acc.max(x.abs()));
        if mx == T::zero() {
            return Ok(Self { size, u, gamma: T::zero() });
        }
        let mut tau = T::zero();
        for x in u.iter_mut() {
            *x = *x / mx;
            tau = tau + *x * *x;
        }
        tau = tau.sqrt();
        // tau takes the sign of u[0] so that u[0] + tau never cancels
        if u[0] < T::zero() {
            tau = -tau;
        }
        let u0 = u[0] + tau;
        u[0] = u0;
        for x in u.iter_mut() {
            *x = *x / u0;
        }
        Ok(Self { size, u, gamma: u0 / tau })
    }

    /// Size `L` of the transform.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn gamma(&self) -> T {
        self.gamma
    }

    /// Householder direction `u`.
    pub fn direction(&self) -> &[T] {
        &self.u
    }

    fn offset(&self) -> usize {
        self.size - self.u.len()
    }

    /// Return `H * m`; `m` must have `L` rows.
    pub fn apply_from_left_to(&self, m: &Matrix<T>) -> Result<Matrix<T>, SingularError> {
        if m.nrows() != self.size {
            return Err(SingularError::shape((self.size, m.ncols()), m.shape()));
        }
        let mut out = m.clone();
        let offset = self.offset();
        for c in 0..m.ncols() {
            // gamma * u^T * m[:, c]
            let mut p = T::zero();
            for (j, &uj) in self.u.iter().enumerate() {
                p = p + uj * m[(offset + j, c)];
            }
            p = p * self.gamma;
            for (j, &uj) in self.u.iter().enumerate() {
                out[(offset + j, c)] = m[(offset + j, c)] - uj * p;
            }
        }
        Ok(out)
    }

    /// Return `m * H`; `m` must have `L` columns.
    pub fn apply_from_right_to(&self, m: &Matrix<T>) -> Result<Matrix<T>, SingularError> {
        if m.ncols() != self.size {
            return Err(SingularError::shape((m.nrows(), self.size), m.shape()));
        }
        let mut out = m.clone();
        let offset = self.offset();
        for r in 0..m.nrows() {
            // gamma * m[r, :] * u
            let mut p = T::zero();
            for (j, &uj) in self.u.iter().enumerate() {
                p = p + m[(r, offset + j)] * uj;
            }
            p = p * self.gamma;
            for (j, &uj) in self.u.iter().enumerate() {
                out[(r, offset + j)] = m[(r, offset + j)] - p * uj;
            }
        }
        Ok(out)
    }
}

impl<T: fmt::Display> fmt::Display for Reflector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gamma: {}, u: [", self.gamma)?;
        for (i, x) in self.u.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
