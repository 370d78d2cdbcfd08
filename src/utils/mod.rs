//! Utility modules: convergence bookkeeping and matrix magnitude helpers.

pub mod convergence;
pub mod norms;

pub use convergence::{Convergence, SvdStats};
pub use norms::{max_abs, max_abs_diff, max_superdiagonal, orthogonality_error};
