//! Singular value decomposition engine.
//!
//! - [`bidiagonal`]: Householder reduction to upper bidiagonal form.
//! - [`shift`]: shift selection from the trailing 2x2 block.
//! - [`francis`]: implicit-shift sweeps with deflation.
//! - [`svd`]: entry points and the result type.

pub mod bidiagonal;
pub(crate) mod francis;
pub mod shift;
pub mod svd;

pub use bidiagonal::bidiagonalize;
pub use shift::wilkinson_shift;
pub use svd::{svd, svd_usv, svd_with, Svd};
