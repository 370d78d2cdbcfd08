//! Matrix module: dense, diagonal and strided vector-view containers.

pub mod dense;
pub mod diagonal;
pub mod ops;
pub mod vector;

pub use dense::Matrix;
pub use diagonal::DiagonalMatrix;
pub use vector::{VectorView, VectorViewMut};
