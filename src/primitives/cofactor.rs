//! Determinant, cofactor matrix and inverse by recursive cofactor expansion.
//!
//! All three are O(n!) in the matrix order. No pivoting is done, so results
//! carry whatever rounding the naive expansion accumulates.

use super::Matrix;
use crate::error::{MatrixError, Result};

impl Matrix {
    fn ensure_square(&self, operation: &'static str) -> Result<()> {
        self.ensure_live(operation)?;
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Calculates the determinant by expansion along the first column.
    ///
    /// ```
    /// use dense_matrix::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("valid");
    /// assert_eq!(m.determinant(), Ok(-2.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square input and
    /// [`MatrixError::InvalidState`] on an empty matrix.
    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square("determinant")?;
        Ok(self.expand_determinant())
    }

    // Requires a live square matrix.
    fn expand_determinant(&self) -> f64 {
        let n = self.rows();
        let a = self.as_slice();
        match n {
            1 => a[0],
            2 => a[0] * a[3] - a[2] * a[1],
            _ => {
                log::trace!("expanding {n}x{n} determinant along first column");
                let mut det = 0.0;
                for i in 0..n {
                    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * a[i * n] * self.minor_of(i, 0).expand_determinant();
                }
                det
            }
        }
    }

    /// Calculates the matrix of algebraic complements (signed minors).
    ///
    /// `C[i][j] = (-1)^(i+j) * det(minor(i, j))`. A 1x1 matrix yields `[[1]]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for non-square input and
    /// [`MatrixError::InvalidState`] on an empty matrix.
    pub fn calc_complements(&self) -> Result<Matrix> {
        self.ensure_square("calc_complements")?;
        let n = self.rows();
        let mut complements = Matrix::zeros(n, n);
        if n == 1 {
            complements.as_mut_slice()[0] = 1.0;
            return Ok(complements);
        }

        let out = complements.as_mut_slice();
        for i in 0..n {
            for j in 0..n {
                let mut minor = self.clone();
                minor.minor(i, j);
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out[i * n + j] = sign * minor.expand_determinant();
            }
        }
        Ok(complements)
    }

    /// Calculates the inverse as `adj(A) / det(A)`.
    ///
    /// Only an exactly zero determinant is rejected; nearly singular matrices
    /// produce an inverse with correspondingly large entries.
    ///
    /// ```
    /// use dense_matrix::primitives::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).expect("valid");
    /// let inv = m.inverse_matrix().expect("invertible");
    /// assert_eq!(inv.get(0, 0), Ok(0.5));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SingularMatrix`] if the determinant is `0.0`, plus
    /// the errors of [`Matrix::determinant`].
    pub fn inverse_matrix(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            log::debug!("rejecting inverse of singular {}x{} matrix", self.rows(), self.cols());
            return Err(MatrixError::SingularMatrix { det });
        }

        let mut inverse = self.calc_complements()?;
        inverse.transpose()?;
        inverse.as_mut_slice().iter_mut().for_each(|v| *v /= det);
        Ok(inverse)
    }
}

#[cfg(test)]
#[path = "cofactor_tests.rs"]
mod tests;
