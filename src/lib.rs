//! singular: dense singular value decomposition
//!
//! This crate factors a dense real `M x N` matrix as `A = U S V^T` using Householder
//! bidiagonalization followed by implicit-shift Francis iteration with deflation. The
//! reflector and rotator primitives, and the row-major containers they act on, are public
//! building blocks.

pub mod config;
pub mod core;
pub mod decomposition;
pub mod error;
pub mod matrix;
pub mod transform;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use decomposition::*;
pub use error::*;
pub use matrix::*;
pub use transform::*;
pub use utils::*;

// Re-export SvdStats at the crate root for convenience
pub use utils::convergence::SvdStats;
