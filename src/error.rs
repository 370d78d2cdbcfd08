use thiserror::Error;

// Unified error type for singular

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SingularError {
    #[error("reflector input vector is empty")]
    EmptyVector,
    #[error("reflector input of length {len} exceeds transform size {size}")]
    VectorTooLong { len: usize, size: usize },
    #[error("slice start must be <= length but {start} > {len}")]
    SliceOutOfRange { start: usize, len: usize },
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: String, found: String },
    #[error("rotation at offset {offset} out of range for dimension {dim}")]
    RotationOutOfRange { offset: usize, dim: usize },
    #[error("francis iteration did not converge after {sweeps} sweeps (off-diagonal {off_diagonal:e})")]
    NotConverged { sweeps: usize, off_diagonal: f64 },
}

impl SingularError {
    pub(crate) fn shape(expected: (usize, usize), found: (usize, usize)) -> Self {
        SingularError::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }
}
