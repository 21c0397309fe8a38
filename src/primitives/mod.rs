//! Core compute primitive: the dense [`Matrix`].
//!
//! Storage, element access and elementwise arithmetic live in `matrix`, the
//! cofactor-expansion algorithms in `cofactor`, and operator sugar in `ops`.

mod cofactor;
mod matrix;
mod ops;

pub use matrix::{Matrix, EPS};
