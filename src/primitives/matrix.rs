//! Matrix type for dense 2D `f64` data.

use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute tolerance below which two elements compare equal in [`Matrix::eq_matrix`].
pub const EPS: f64 = 1e-7;

/// A dense matrix of `f64` values (row-major storage).
///
/// A live matrix always has `rows > 0`, `cols > 0` and exactly `rows * cols`
/// elements. The only other state is *empty* (0x0, no storage), reached by
/// [`Matrix::take`]; an empty matrix can be dropped, reassigned or asked for its
/// shape, and every operation that reads elements rejects it with
/// [`MatrixError::InvalidState`].
///
/// # Examples
///
/// ```
/// use dense_matrix::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), Ok(6.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; deserialization goes through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct MatrixRepr {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        Self::from_vec(repr.rows, repr.cols, repr.data)
    }
}

impl Matrix {
    /// Creates a 3x3 matrix of zeros.
    #[must_use]
    pub fn new() -> Self {
        Self::zeros(3, 3)
    }

    /// Creates an `n x n` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `n == 0`.
    pub fn square(n: usize) -> Result<Self> {
        Self::with_shape(n, n)
    }

    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if either dimension is zero or
    /// the element count does not fit in memory.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self::zeros(rows, cols))
    }

    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dimensions(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{len} elements for {rows}x{cols}"),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// ```
    /// use dense_matrix::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("rectangular input");
    /// assert_eq!(m.shape(), (2, 2));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] for no rows or empty rows and
    /// [`MatrixError::DimensionMismatch`] for ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = check_dimensions(rows.len(), cols)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    expected: format!("row {i} of length {cols}"),
                    actual: format!("length {}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `n == 0`.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::square(n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    // Callers validate the shape with `check_dimensions` first.
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Moves the contents out, leaving `self` empty (0x0, no storage).
    ///
    /// An empty matrix still serializes, but the payload is rejected on
    /// deserialization because a 0x0 shape is not a valid matrix.
    ///
    /// ```
    /// use dense_matrix::primitives::Matrix;
    ///
    /// let mut a = Matrix::new();
    /// let b = a.take();
    /// assert_eq!(b.shape(), (3, 3));
    /// assert!(a.is_empty());
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    /// Returns `true` if the matrix has no storage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0 || self.data.is_empty()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub(crate) fn ensure_live(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            Err(MatrixError::InvalidState { operation })
        } else {
            Ok(())
        }
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.checked_offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.checked_offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Changes the row count, keeping existing rows and zero-filling new ones.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `rows == 0` or the new
    /// element count does not fit in memory, and
    /// [`MatrixError::InvalidState`] on an empty matrix.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        if rows == 0 {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols: self.cols,
            });
        }
        self.ensure_live("set_rows")?;
        self.resize(rows, self.cols)
    }

    /// Changes the column count, keeping existing columns and zero-filling new ones.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `cols == 0` or the new
    /// element count does not fit in memory, and
    /// [`MatrixError::InvalidState`] on an empty matrix.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        if cols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows,
                cols,
            });
        }
        self.ensure_live("set_cols")?;
        self.resize(self.rows, cols)
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        if (rows, cols) == (self.rows, self.cols) {
            return Ok(());
        }
        check_dimensions(rows, cols)?;
        log::debug!(
            "resizing matrix {}x{} -> {rows}x{cols}",
            self.rows,
            self.cols
        );

        let mut resized = Self::zeros(rows, cols);
        let keep = self.cols.min(cols);
        for (dst, src) in resized
            .data
            .chunks_exact_mut(cols)
            .zip(self.data.chunks_exact(self.cols))
        {
            dst[..keep].copy_from_slice(&src[..keep]);
        }
        *self = resized;
        Ok(())
    }

    /// Checks matrices for equality within [`EPS`].
    ///
    /// Matrices of different shape (or empty ones) are never equal.
    #[must_use]
    pub fn eq_matrix(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() || self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() < EPS)
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        self.ensure_live(operation)?;
        other.ensure_live(operation)?;
        if self.shape() != other.shape() {
            return Err(MatrixError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Adds another matrix element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if shapes differ and
    /// [`MatrixError::InvalidState`] if either operand is empty.
    pub fn sum_matrix(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "sum_matrix")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts another matrix element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if shapes differ and
    /// [`MatrixError::InvalidState`] if either operand is empty.
    pub fn sub_matrix(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "sub_matrix")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies each element by a scalar, in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidState`] on an empty matrix.
    pub fn mul_number(&mut self, scalar: f64) -> Result<()> {
        self.ensure_live("mul_number")?;
        self.data.iter_mut().for_each(|x| *x *= scalar);
        Ok(())
    }

    /// Replaces `self` with the product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`
    /// and [`MatrixError::InvalidState`] if either operand is empty.
    pub fn mul_matrix(&mut self, other: &Self) -> Result<()> {
        self.ensure_live("mul_matrix")?;
        other.ensure_live("mul_matrix")?;
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                expected: format!("{} rows in right operand", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        check_dimensions(self.rows, other.cols)?;
        let mut product = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for r in 0..self.cols {
                    sum += self.data[i * self.cols + r] * other.data[r * other.cols + j];
                }
                product.data[i * other.cols + j] = sum;
            }
        }
        *self = product;
        Ok(())
    }

    /// Transposes the matrix in place and returns it for chaining.
    ///
    /// ```
    /// use dense_matrix::primitives::Matrix;
    ///
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).expect("valid");
    /// m.transpose().expect("non-empty");
    /// assert_eq!(m.shape(), (3, 1));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidState`] on an empty matrix.
    pub fn transpose(&mut self) -> Result<&mut Self> {
        *self = self.transposed()?;
        Ok(self)
    }

    /// Returns the transpose as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidState`] on an empty matrix.
    pub fn transposed(&self) -> Result<Self> {
        self.ensure_live("transpose")?;
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(t)
    }

    /// Replaces `self` with the submatrix left after deleting one row and one column.
    ///
    /// Callers guarantee a live matrix of at least 2x2 and in-range indices.
    pub(crate) fn minor(&mut self, exclude_row: usize, exclude_col: usize) {
        *self = self.minor_of(exclude_row, exclude_col);
    }

    /// Non-mutating form of [`Matrix::minor`].
    pub(crate) fn minor_of(&self, exclude_row: usize, exclude_col: usize) -> Self {
        debug_assert!(exclude_row < self.rows && exclude_col < self.cols);
        let (rows, cols) = (self.rows - 1, self.cols - 1);
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            if i == exclude_row {
                continue;
            }
            data.extend(
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != exclude_col)
                    .map(|(_, &v)| v),
            );
        }
        Self { data, rows, cols }
    }
}

impl Default for Matrix {
    /// Default matrix is 3x3 zeros.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{}", self.rows, self.cols)?;
        if self.is_empty() {
            return Ok(());
        }
        for row in self.data.chunks_exact(self.cols) {
            let line: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Largest element count a `Vec<f64>` can hold.
const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Validates a shape and returns its element count.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len > 0 && len <= MAX_ELEMENTS)
        .ok_or(MatrixError::InvalidDimension { rows, cols })
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
