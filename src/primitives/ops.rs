//! Operator overloads for [`Matrix`].
//!
//! Binary operators build a new matrix and leave both operands untouched.
//! They panic where the named method returns an error; use the methods when
//! shapes are not known to be compatible.

use super::Matrix;
use crate::error::Result;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

#[track_caller]
fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl PartialEq for Matrix {
    /// Tolerance comparison, see [`Matrix::eq_matrix`].
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        let idx = or_panic(self.checked_offset(row, col));
        &self.as_slice()[idx]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        let idx = or_panic(self.checked_offset(row, col));
        &mut self.as_mut_slice()[idx]
    }
}

impl AddAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if shapes differ or either operand is empty.
    #[track_caller]
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sum_matrix(rhs));
    }
}

impl SubAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if shapes differ or either operand is empty.
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sub_matrix(rhs));
    }
}

impl MulAssign<f64> for Matrix {
    /// # Panics
    ///
    /// Panics on an empty matrix.
    #[track_caller]
    fn mul_assign(&mut self, rhs: f64) {
        or_panic(self.mul_number(rhs));
    }
}

impl MulAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()` or either operand is empty.
    #[track_caller]
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.mul_matrix(rhs));
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(mut self, rhs: &Matrix) -> Matrix {
        self += rhs;
        self
    }
}

impl Add for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(self, rhs: Matrix) -> Matrix {
        self + &rhs
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn add(self, rhs: &Matrix) -> Matrix {
        self.clone() + rhs
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(mut self, rhs: &Matrix) -> Matrix {
        self -= rhs;
        self
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(self, rhs: Matrix) -> Matrix {
        self - &rhs
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn sub(self, rhs: &Matrix) -> Matrix {
        self.clone() - rhs
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(mut self, rhs: f64) -> Matrix {
        self *= rhs;
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: f64) -> Matrix {
        self.clone() * rhs
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(mut self, rhs: &Matrix) -> Matrix {
        self *= rhs;
        self
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: Matrix) -> Matrix {
        self * &rhs
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    #[track_caller]
    fn mul(self, rhs: &Matrix) -> Matrix {
        self.clone() * rhs
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
