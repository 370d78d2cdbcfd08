//! API options for the SVD engine.
//!
//! `SvdOptions` controls the deflation tolerance of the Francis iteration, the sweep budget
//! (a multiple of the column count) and whether hitting that budget is an error.

use num_traits::Float;

/// Francis iteration parameters.
#[derive(Clone, Debug)]
pub struct SvdOptions<T> {
    /// Relative deflation threshold for `|superdiagonal / diagonal|`.
    pub tol: T,

    /// Sweep budget per column; the cap is `sweeps_per_column * N`.
    pub sweeps_per_column: usize,

    /// Return `NotConverged` instead of a best-effort result when the cap is reached.
    pub require_convergence: bool,
}

impl<T: Float> SvdOptions<T> {
    /// Defaults: `tol = 1e-15`, 10 sweeps per column, best-effort on the cap.
    pub fn new() -> Self {
        Self {
            tol: T::from(1e-15).unwrap_or_else(T::epsilon),
            sweeps_per_column: 10,
            require_convergence: false,
        }
    }

    /// Set the relative deflation threshold.
    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    /// Set the per-column sweep budget.
    pub fn with_sweeps_per_column(mut self, sweeps: usize) -> Self {
        self.sweeps_per_column = sweeps;
        self
    }

    /// Turn a reached sweep cap into an error.
    pub fn require_convergence(mut self, strict: bool) -> Self {
        self.require_convergence = strict;
        self
    }
}

impl<T: Float> Default for SvdOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}
