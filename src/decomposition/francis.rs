//! Implicit-shift Francis iteration on an upper bidiagonal matrix (Golub & Van Loan §8.6.2).
//!
//! Each sweep chases the bulge introduced by a shifted first rotation down the band, which is
//! equivalent to one shifted QR step on `B^T B` without ever forming it. The active block
//! shrinks from the bottom as trailing superdiagonals become negligible (deflation), and a
//! negligible interior superdiagonal splits the block so that sweeps only run over the
//! bottom-most unreduced part. A negligible diagonal entry in the block makes the shifted step
//! stall, so it is set to zero and its row (or, at the block bottom, its column) is rotated
//! clean instead, which splits the block.
//!
//! # References
//! - Golub, G. & Van Loan, C. (2013). Matrix Computations, 4th Edition. §8.6
//! - Demmel, J. & Kahan, W. (1990). Accurate singular values of bidiagonal matrices.

use crate::decomposition::shift::wilkinson_shift;
use crate::error::SingularError;
use crate::matrix::Matrix;
use crate::transform::Rotator;
use crate::utils::convergence::{Convergence, SvdStats};
use crate::utils::norms::max_superdiagonal;
use log::{debug, trace, warn};
use num_traits::Float;

/// Working state of one diagonalization: `A = U B V^T` holds after every step.
pub(crate) struct Francis<T> {
    pub u: Matrix<T>,
    pub b: Matrix<T>,
    pub v: Matrix<T>,
}

impl<T: Float> Francis<T> {
    pub fn new(u: Matrix<T>, b: Matrix<T>, v: Matrix<T>) -> Self {
        Self { u, b, v }
    }

    /// Iterate until every superdiagonal is negligible or the sweep cap is hit.
    pub fn run(&mut self, conv: &Convergence<T>) -> Result<SvdStats<T>, SingularError> {
        let mut n = self.b.ncols();
        let mut sweeps = 0;
        self.deflate(&mut n, conv);
        loop {
            let (stop, stats) = conv.check(n, sweeps, max_superdiagonal(&self.b));
            if stop {
                if stats.converged {
                    debug!("francis iteration converged after {} sweeps", sweeps);
                } else {
                    warn!(
                        "francis iteration stopped at the {}-sweep cap with {} columns active",
                        sweeps, n
                    );
                }
                return Ok(stats);
            }
            let l = self.split(n, conv);
            let zero = (l..n).rev().find(|&k| conv.is_negligible_diagonal(self.b[(k, k)]));
            match zero {
                Some(k) if k + 1 < n => self.clear_row(k, n),
                Some(_) => self.clear_column(l, n),
                None => self.sweep(l, n)?,
            }
            sweeps += 1;
            trace!("sweep {} over block [{}, {})", sweeps, l, n);
            self.deflate(&mut n, conv);
        }
    }

    /// Shrink the active size `n` while its trailing superdiagonal is negligible.
    fn deflate(&mut self, n: &mut usize, conv: &Convergence<T>) {
        while *n >= 2 && conv.is_negligible(self.b[(*n - 2, *n - 1)], self.b[(*n - 1, *n - 1)]) {
            self.b[(*n - 2, *n - 1)] = T::zero();
            *n -= 1;
            debug!("deflated singular value {}", *n);
        }
    }

    /// Top row `l` of the unreduced block ending at `n`; zeroes the splitting superdiagonal.
    fn split(&mut self, n: usize, conv: &Convergence<T>) -> usize {
        let mut l = n - 2;
        while l > 0 {
            if conv.is_negligible(self.b[(l - 1, l)], self.b[(l, l)]) {
                self.b[(l - 1, l)] = T::zero();
                break;
            }
            l -= 1;
        }
        l
    }

    /// One implicit-shift sweep over the block `[l, n)`.
    fn sweep(&mut self, l: usize, n: usize) -> Result<(), SingularError> {
        let beta = self.b[(l, l)];
        let gamma = self.b[(l, l + 1)];
        let rho = wilkinson_shift(
            self.b[(n - 2, n - 2)],
            self.b[(n - 2, n - 1)],
            self.b[(n - 1, n - 1)],
        );
        let mx = beta.abs().max(gamma.abs()).max(rho.abs());
        let (beta, gamma, rho) = (beta / mx, gamma / mx, rho / mx);
        let first = Rotator::new(beta * beta - rho * rho, beta * gamma);
        self.rotate_columns(&first, l)?;
        self.chase_down(l)?;
        for i in (l + 1)..(n - 1) {
            let right = Rotator::new(self.b[(i - 1, i)], self.b[(i - 1, i + 1)]);
            self.rotate_columns(&right, i)?;
            self.b[(i - 1, i + 1)] = T::zero();
            self.chase_down(i)?;
        }
        Ok(())
    }

    /// Zero the bulge at `(k + 1, k)` with a left rotation, accumulating it into `U`.
    fn chase_down(&mut self, k: usize) -> Result<(), SingularError> {
        let left = Rotator::new(self.b[(k, k)], self.b[(k + 1, k)]);
        self.b = left.apply_from_left_to(&self.b, k)?;
        self.b[(k + 1, k)] = T::zero();
        // B' = Q^T B, so A = (U Q) B' V^T
        self.u = left.apply_from_right_to(&self.u, k)?;
        Ok(())
    }

    /// Rotate columns `k`, `k + 1` of `B` and `V` together.
    fn rotate_columns(&mut self, r: &Rotator<T>, k: usize) -> Result<(), SingularError> {
        self.b = r.apply_from_right_to(&self.b, k)?;
        self.v = r.apply_from_right_to(&self.v, k)?;
        Ok(())
    }

    /// `B(k, k)` vanished inside the block ending at `n`: push the superdiagonal of row `k`
    /// to the right with left rotations against rows `k + 1 .. n` until row `k` is zero.
    fn clear_row(&mut self, k: usize, n: usize) {
        debug!("zero diagonal at {}, clearing row", k);
        self.b[(k, k)] = T::zero();
        for j in (k + 1)..n {
            let r = Rotator::new(self.b[(j, j)], self.b[(k, j)]);
            rotate_rows(&mut self.b, &r, j, k);
            self.b[(k, j)] = T::zero();
            // B' = Q^T B on rows (j, k), so U takes Q on columns (j, k)
            rotate_cols(&mut self.u, &r, j, k);
        }
    }

    /// `B(n - 1, n - 1)` vanished: push the last column up with right rotations against
    /// columns `n - 2 ..= l` until column `n - 1` is zero.
    fn clear_column(&mut self, l: usize, n: usize) {
        let q = n - 1;
        debug!("zero diagonal at {}, clearing column", q);
        self.b[(q, q)] = T::zero();
        for j in (l..q).rev() {
            let r = Rotator::new(self.b[(j, j)], self.b[(j, q)]);
            rotate_cols(&mut self.b, &r, j, q);
            self.b[(j, q)] = T::zero();
            rotate_cols(&mut self.v, &r, j, q);
        }
    }
}

/// Apply `Q^T` to rows `p` and `q` of `m` (not necessarily adjacent).
fn rotate_rows<T: Float>(m: &mut Matrix<T>, r: &Rotator<T>, p: usize, q: usize) {
    let (cs, sn) = (r.cos(), r.sin());
    for c in 0..m.ncols() {
        let (x1, x2) = (m[(p, c)], m[(q, c)]);
        m[(p, c)] = cs * x1 + sn * x2;
        m[(q, c)] = -sn * x1 + cs * x2;
    }
}

/// Apply `Q` to columns `p` and `q` of `m` (not necessarily adjacent).
fn rotate_cols<T: Float>(m: &mut Matrix<T>, r: &Rotator<T>, p: usize, q: usize) {
    let (cs, sn) = (r.cos(), r.sin());
    for i in 0..m.nrows() {
        let (x1, x2) = (m[(i, p)], m[(i, q)]);
        m[(i, p)] = x1 * cs + x2 * sn;
        m[(i, q)] = -x1 * sn + x2 * cs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{max_abs_diff, orthogonality_error};

    fn conv() -> Convergence<f64> {
        Convergence { tol: 1e-15, floor: 1e-15, max_sweeps: 30 }
    }

    #[test]
    fn diagonalizes_small_bidiagonal() {
        let b = Matrix::from_row_major(3, 3, &[4.0, 1.0, 0.0, 0.0, 3.0, 2.0, 0.0, 0.0, 1.0]).unwrap();
        let mut f = Francis::new(Matrix::identity(3), b.clone(), Matrix::identity(3));
        let stats = f.run(&conv()).unwrap();
        assert!(stats.converged);
        assert_eq!(stats.off_diagonal, 0.0);
        let usv = &(&f.u * &f.b) * &f.v.transpose();
        assert!(max_abs_diff(&usv, &b) < 1e-13);
        assert!(orthogonality_error(&f.u) < 1e-14);
        assert!(orthogonality_error(&f.v) < 1e-14);
    }

    fn assert_diagonalized(f: &Francis<f64>, b: &Matrix<f64>) {
        let usv = &(&f.u * &f.b) * &f.v.transpose();
        assert!(max_abs_diff(&usv, b) < 1e-13);
        assert!(orthogonality_error(&f.u) < 1e-14);
        assert!(orthogonality_error(&f.v) < 1e-14);
        assert_eq!(max_superdiagonal(&f.b), 0.0);
    }

    #[test]
    fn interior_zero_diagonal_splits_block() {
        let b = Matrix::from_row_major(
            4,
            4,
            &[1.0, 2.0, 0.0, 0.0, 0.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0],
        )
        .unwrap();
        let mut f = Francis::new(Matrix::identity(4), b.clone(), Matrix::identity(4));
        let stats = f.run(&Convergence { tol: 1e-15, floor: 1e-15, max_sweeps: 40 }).unwrap();
        assert!(stats.converged);
        assert!(stats.sweeps < 20, "took {} sweeps", stats.sweeps);
        assert_diagonalized(&f, &b);
        // det(B) == 0
        let smallest = (0..4).map(|i| f.b[(i, i)].abs()).fold(f64::INFINITY, f64::min);
        assert!(smallest < 1e-14);
    }

    #[test]
    fn zero_diagonal_above_coupled_row() {
        let b = Matrix::from_row_major(3, 3, &[1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
        let mut f = Francis::new(Matrix::identity(3), b.clone(), Matrix::identity(3));
        let stats = f.run(&conv()).unwrap();
        assert!(stats.converged);
        assert!(stats.sweeps < 10, "took {} sweeps", stats.sweeps);
        assert_diagonalized(&f, &b);
    }

    #[test]
    fn zero_bottom_diagonal_clears_column() {
        let b = Matrix::from_row_major(3, 3, &[2.0, 1.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0]).unwrap();
        let mut f = Francis::new(Matrix::identity(3), b.clone(), Matrix::identity(3));
        let stats = f.run(&conv()).unwrap();
        assert!(stats.converged);
        assert_diagonalized(&f, &b);
        assert_eq!(f.b[(2, 2)], 0.0);
    }

    #[test]
    fn zero_top_diagonal_is_rotated_out() {
        let b = Matrix::from_row_major(2, 2, &[0.0, -1.0, 0.0, 1.0]).unwrap();
        let mut f = Francis::new(Matrix::identity(2), b.clone(), Matrix::identity(2));
        let stats = f.run(&conv()).unwrap();
        assert!(stats.converged);
        assert!(stats.sweeps <= 2);
        let usv = &(&f.u * &f.b) * &f.v.transpose();
        assert!(max_abs_diff(&usv, &b) < 1e-14);
    }

    #[test]
    fn split_block_still_converges() {
        // B(0, 1) == 0 decouples the leading 1x1 block
        let b = Matrix::from_row_major(3, 3, &[2.0, 0.0, 0.0, 0.0, 1.0, 3.0, 0.0, 0.0, 5.0]).unwrap();
        let mut f = Francis::new(Matrix::identity(3), b.clone(), Matrix::identity(3));
        let stats = f.run(&conv()).unwrap();
        assert!(stats.converged);
        let usv = &(&f.u * &f.b) * &f.v.transpose();
        assert!(max_abs_diff(&usv, &b) < 1e-13);
    }

    #[test]
    fn cap_reached_is_reported() {
        let b = Matrix::from_row_major(3, 3, &[1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
        let tight = Convergence { tol: 1e-15, floor: 0.0, max_sweeps: 0 };
        let mut f = Francis::new(Matrix::identity(3), b, Matrix::identity(3));
        let stats = f.run(&tight).unwrap();
        assert!(!stats.converged);
        assert_eq!(stats.sweeps, 0);
        assert_eq!(stats.off_diagonal, 1.0);
    }
}
