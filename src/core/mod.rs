//! Core traits and third-party container wrappers.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatrixGet};
