//! Dense real-valued matrices with exact cofactor-expansion algebra.
//!
//! The crate provides a single value type, [`Matrix`], holding `f64` elements
//! in row-major order, with element access, in-place arithmetic, tolerance
//! equality, transpose, determinant, cofactor matrix and inverse.
//!
//! # Quick Start
//!
//! ```
//! use dense_matrix::prelude::*;
//!
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
//! assert!((a.determinant().unwrap() - 10.0).abs() < EPS);
//!
//! let inv = a.inverse_matrix().unwrap();
//! let product = &a * &inv;
//! assert_eq!(product, Matrix::identity(2).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type and its operators
//! - [`error`]: the [`MatrixError`] taxonomy
//!
//! Logging goes through the [`log`] facade; nothing is emitted unless the
//! host application installs a logger.

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrixError, Result};
pub use primitives::{Matrix, EPS};
