//! Convergence tracking & deflation tests for the Francis iteration.

use num_traits::Float;

/// Stopping criteria.
#[derive(Clone, Debug)]
pub struct Convergence<T> {
    /// Relative threshold for `|superdiagonal / diagonal|`.
    pub tol: T,
    /// Absolute threshold below which a superdiagonal or diagonal entry is treated as zero.
    pub floor: T,
    pub max_sweeps: usize,
}

#[derive(Clone, Debug)]
pub struct SvdStats<T> {
    /// Francis sweeps performed, counting passes that clear a zero diagonal entry.
    pub sweeps: usize,
    /// Largest superdiagonal magnitude left in the bidiagonal after iterating.
    pub off_diagonal: T,
    pub converged: bool,
}

impl<T: Copy + Float> Convergence<T> {
    /// Whether superdiagonal `g` is negligible next to the diagonal entry `d` below it.
    pub fn is_negligible(&self, g: T, d: T) -> bool {
        let g = g.abs();
        g == T::zero() || g < self.tol * d.abs() || g <= self.floor
    }

    /// Whether diagonal entry `d` is small enough to be replaced by an exact zero.
    pub fn is_negligible_diagonal(&self, d: T) -> bool {
        d.abs() <= self.floor
    }

    /// Returns (should_stop, stats) given the active block size `n` after `sweeps` sweeps.
    pub fn check(&self, n: usize, sweeps: usize, off_diagonal: T) -> (bool, SvdStats<T>) {
        let converged = n < 2;
        (
            converged || sweeps >= self.max_sweeps,
            SvdStats { sweeps, off_diagonal, converged },
        )
    }
}
