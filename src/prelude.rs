//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use dense_matrix::prelude::*;
//! ```

pub use crate::error::MatrixError;
pub use crate::primitives::{Matrix, EPS};
