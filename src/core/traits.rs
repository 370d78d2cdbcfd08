//! Core matrix-access traits for singular.

/// Shape of a matrix-like container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Read access to the element at row `i`, column `j`.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}
