//! Singular value decomposition `A = U S V^T`.
//!
//! Two phases: Householder bidiagonalization, then implicit-shift Francis iteration with
//! deflation. Wide inputs (`M < N`) are decomposed through their transpose. Singular values
//! come out non-negative, in the order the iteration leaves them; call [`Svd::sorted`] for
//! descending order.
//!
//! # Usage
//! ```rust
//! use singular::{svd, Matrix};
//! let a = Matrix::from_row_major(2, 1, &[3.0_f64, 4.0]).unwrap();
//! let usv = svd(&a).unwrap();
//! assert!((usv.s.get(0, 0) - 5.0).abs() < 1e-14);
//! ```

use crate::config::SvdOptions;
use crate::decomposition::bidiagonal::bidiagonalize;
use crate::decomposition::francis::Francis;
use crate::error::SingularError;
use crate::matrix::{DiagonalMatrix, Matrix};
use crate::utils::convergence::{Convergence, SvdStats};
use crate::utils::norms::max_abs;
use log::debug;
use num_traits::Float;

/// Result of a decomposition.
#[derive(Clone, Debug)]
pub struct Svd<T> {
    /// Left singular vectors, `M x M` orthogonal.
    pub u: Matrix<T>,
    /// Singular values, `M x N` diagonal.
    pub s: DiagonalMatrix<T>,
    /// Right singular vectors, `N x N` orthogonal.
    pub v: Matrix<T>,
    pub stats: SvdStats<T>,
}

impl<T: Float> Svd<T> {
    /// The `min(M, N)` singular values in iteration order.
    pub fn singular_values(&self) -> &[T] {
        self.s.values()
    }

    /// `U S V^T`.
    pub fn reconstruct(&self) -> Matrix<T> {
        &(&self.u * &self.s) * &self.v.transpose()
    }

    pub fn into_parts(self) -> (Matrix<T>, DiagonalMatrix<T>, Matrix<T>) {
        (self.u, self.s, self.v)
    }

    /// Reorder singular values descending, permuting the columns of `U` and `V` alike.
    pub fn sorted(self) -> Self {
        let values = self.s.values();
        let k = values.len();
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(std::cmp::Ordering::Equal));
        let sorted: Vec<T> = order.iter().map(|&i| values[i]).collect();
        let u_order: Vec<usize> = order.iter().copied().chain(k..self.u.ncols()).collect();
        let v_order: Vec<usize> = order.iter().copied().chain(k..self.v.ncols()).collect();
        let (nrows, ncols) = (self.s.nrows(), self.s.ncols());
        Svd {
            u: self.u.shuffle_columns(&u_order),
            s: DiagonalMatrix::from_values(nrows, ncols, &sorted)
                .unwrap_or_else(|_| DiagonalMatrix::zeros(nrows, ncols)),
            v: self.v.shuffle_columns(&v_order),
            stats: self.stats,
        }
    }
}

/// Decompose `a` with default options.
pub fn svd<T: Float>(a: &Matrix<T>) -> Result<Svd<T>, SingularError> {
    svd_with(a, &SvdOptions::default())
}

/// Decompose `a`.
///
/// # Errors
/// `NotConverged` only when `options.require_convergence` is set and the sweep cap
/// (`options.sweeps_per_column * min(M, N)`) is reached first.
pub fn svd_with<T: Float>(a: &Matrix<T>, options: &SvdOptions<T>) -> Result<Svd<T>, SingularError> {
    let (m, n) = a.shape();
    let result = if m < n {
        // A^T = U' S' V'^T  =>  A = V' S'^T U'^T
        let t = decompose_tall(&a.transpose(), options)?;
        Svd { u: t.v, s: t.s.transpose(), v: t.u, stats: t.stats }
    } else {
        decompose_tall(a, options)?
    };
    if options.require_convergence && !result.stats.converged {
        return Err(SingularError::NotConverged {
            sweeps: result.stats.sweeps,
            off_diagonal: result.stats.off_diagonal.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(result)
}

/// Decompose `a` and return `(U, S, V)` with `S` as a dense `M x N` matrix.
pub fn svd_usv<T: Float>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>, Matrix<T>), SingularError> {
    let (u, s, v) = svd(a)?.into_parts();
    Ok((u, s.to_dense(), v))
}

fn decompose_tall<T: Float>(a: &Matrix<T>, options: &SvdOptions<T>) -> Result<Svd<T>, SingularError> {
    let (m, n) = a.shape();
    let (u, b, v) = bidiagonalize(a)?;
    let conv = Convergence {
        tol: options.tol,
        floor: T::epsilon() * max_abs(&b),
        max_sweeps: options.sweeps_per_column * n,
    };
    let mut francis = Francis::new(u, b, v);
    let stats = francis.run(&conv)?;
    let Francis { mut u, mut b, v } = francis;
    // B D and U D with D = diag(+-1) keep A = U B V^T and make the diagonal non-negative
    for j in 0..n {
        if b[(j, j)] < T::zero() {
            b[(j, j)] = -b[(j, j)];
            for i in 0..m {
                u[(i, j)] = -u[(i, j)];
            }
        }
    }
    debug!("decomposed {}x{} matrix in {} sweeps", m, n, stats.sweeps);
    Ok(Svd { u, s: DiagonalMatrix::from_dense_diagonal(&b), v, stats })
}

impl<T: Float> Matrix<T> {
    /// Singular value decomposition with default options; see [`svd`].
    pub fn svd(&self) -> Result<Svd<T>, SingularError> {
        svd(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{max_abs_diff, orthogonality_error};
    use approx::assert_abs_diff_eq;

    #[test]
    fn pythagorean_column() {
        let a = Matrix::from_row_major(2, 1, &[3.0, 4.0]).unwrap();
        let r = svd(&a).unwrap();
        assert_abs_diff_eq!(r.s.get(0, 0), 5.0, epsilon = 1e-14);
        assert_eq!(r.v.as_slice(), &[1.0]);
        // U^T [3, 4] = [5, 0]
        let uta = &r.u.transpose() * &a;
        assert_abs_diff_eq!(uta[(0, 0)], 5.0, epsilon = 1e-14);
        assert_abs_diff_eq!(uta[(1, 0)], 0.0, epsilon = 1e-14);
        assert!(r.stats.converged);
    }

    #[test]
    fn one_by_one_negative() {
        let a = Matrix::from_row_major(1, 1, &[-2.5]).unwrap();
        let r = svd(&a).unwrap();
        assert_eq!(r.singular_values(), &[2.5]);
        assert!(max_abs_diff(&r.reconstruct(), &a) < 1e-15);
    }

    #[test]
    fn sorted_orders_descending_and_keeps_product() {
        let a = Matrix::from_row_major(3, 3, &[1.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 2.0]).unwrap();
        let r = svd(&a).unwrap().sorted();
        let s = r.singular_values();
        assert!(s[0] >= s[1] && s[1] >= s[2]);
        assert_abs_diff_eq!(s[0], 3.0, epsilon = 1e-14);
        assert!(max_abs_diff(&r.reconstruct(), &a) < 1e-13);
        assert!(orthogonality_error(&r.u) < 1e-14);
    }

    #[test]
    fn strict_mode_reports_cap() {
        let a = Matrix::from_row_major(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]).unwrap();
        let opts = SvdOptions::new().with_sweeps_per_column(0).require_convergence(true);
        let err = svd_with(&a, &opts).unwrap_err();
        assert!(matches!(err, SingularError::NotConverged { sweeps: 0, .. }));
        // best-effort mode still returns a valid factorization
        let r = svd_with(&a, &SvdOptions::new().with_sweeps_per_column(0)).unwrap();
        assert!(!r.stats.converged);
        assert!(orthogonality_error(&r.u) < 1e-14);
    }

    #[test]
    fn dense_tuple_form() {
        let a = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let (u, s, v) = svd_usv(&a).unwrap();
        assert_eq!(s.shape(), (2, 3));
        assert_eq!(s[(0, 1)], 0.0);
        let usv = &(&u * &s) * &v.transpose();
        assert!(max_abs_diff(&usv, &a) < 1e-13);
    }
}
