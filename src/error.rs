//! Error types for matrix operations.
//!
//! Every fallible operation validates its inputs before touching any data,
//! so an `Err` always leaves the receiver exactly as it was.

use thiserror::Error;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use dense_matrix::error::MatrixError;
///
/// let err = MatrixError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A requested row or column count is zero.
    #[error("Invalid matrix dimension: {rows}x{cols}, rows and cols must be greater than 0")]
    InvalidDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Element index outside the current shape.
    #[error("Index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
    },

    /// Shapes are incompatible for the requested operation.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation needs a square matrix.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
    },

    /// Determinant is exactly zero, so no inverse exists.
    #[error("Singular matrix detected: determinant = {det}, cannot invert")]
    SingularMatrix {
        /// Determinant value
        det: f64,
    },

    /// The matrix has no storage (its contents were taken).
    #[error("Invalid state: {operation} requires a non-empty matrix")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
    },
}

impl MatrixError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;
