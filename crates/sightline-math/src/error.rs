//! Error types for matrix math.

use thiserror::Error;

/// Failure kinds for the fallible matrix operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// The matrix is singular. Raised only on an exact zero determinant.
    #[error("inverse not available: determinant is {determinant}")]
    InverseNotAvailable { determinant: f32 },

    /// A transform constructor received clipping planes, a field of view or an
    /// aspect ratio outside its domain. This is a caller bug.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

/// Convenience alias for `Result<T, MathError>`.
pub type MathResult<T> = Result<T, MathError>;
