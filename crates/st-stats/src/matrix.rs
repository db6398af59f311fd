//! `Matrix` — a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` exposing the ordinary
//! matrix-algebra surface: construction, indexing, arithmetic,
//! transpose, determinant, inverse, trace.  Binary operations check
//! dimensions and return `Result` instead of panicking.

use nalgebra::DMatrix;
use st_core::errors::{Error, Result};
use st_core::Real;
use std::ops::{Index, IndexMut};

/// A dynamically-sized 2D matrix of `Real` values (row-major access,
/// 0-indexed).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    ///
    /// Returns an error if `data.len() != rows * cols`.
    pub fn from_rows(rows: usize, cols: usize, data: &[Real]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter(format!(
                "expected {} elements for a {rows}x{cols} matrix, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self(DMatrix::from_row_slice(rows, cols, data)))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows(),
                left_cols: self.cols(),
                right_rows: other.rows(),
                right_cols: other.cols(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        Ok(Self(&self.0 + &other.0))
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        Ok(Self(&self.0 - &other.0))
    }

    /// Multiply every element by a scalar.
    pub fn scale(&self, factor: Real) -> Matrix {
        Self(&self.0 * factor)
    }

    /// Matrix product `self · other`.
    ///
    /// Requires `self.cols() == other.rows()`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows(),
                left_cols: self.cols(),
                right_rows: other.rows(),
                right_cols: other.cols(),
            });
        }
        Ok(Self(&self.0 * &other.0))
    }

    /// Transpose.
    pub fn transpose(&self) -> Matrix {
        Self(self.0.transpose())
    }

    /// Determinant.  Errors on a non-square matrix.
    pub fn determinant(&self) -> Result<Real> {
        if !self.is_square() {
            return Err(Error::Precondition(format!(
                "determinant requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        Ok(self.0.determinant())
    }

    /// Inverse.  Errors on a non-square or singular matrix.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::Precondition(format!(
                "inverse requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        self.0
            .clone()
            .try_inverse()
            .map(Self)
            .ok_or_else(|| Error::Runtime("matrix is singular".into()))
    }

    /// Trace (sum of diagonal elements).  Errors on a non-square
    /// matrix.
    pub fn trace(&self) -> Result<Real> {
        if !self.is_square() {
            return Err(Error::Precondition(format!(
                "trace requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        Ok(self.0.trace())
    }

    /// Extract a row as a vector.
    pub fn row(&self, i: usize) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Real;

    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    #[test]
    fn construction_checks_length() {
        assert!(Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn indexing_is_row_major() {
        let m = sample();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn add_and_sub() {
        let m = sample();
        let sum = m.add(&m).unwrap();
        assert_eq!(sum[(1, 1)], 8.0);
        let diff = sum.sub(&m).unwrap();
        assert_eq!(diff, m);
    }

    #[test]
    fn dimension_mismatch_reported() {
        let m = sample();
        let other = Matrix::zeros(3, 2);
        assert!(matches!(
            m.add(&other),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(m.mul(&Matrix::zeros(3, 3)).is_err());
    }

    #[test]
    fn multiplication() {
        let m = sample();
        let id = Matrix::identity(2);
        assert_eq!(m.mul(&id).unwrap(), m);
        let prod = m.mul(&m).unwrap();
        assert_eq!(prod[(0, 0)], 7.0);
        assert_eq!(prod[(0, 1)], 10.0);
        assert_eq!(prod[(1, 0)], 15.0);
        assert_eq!(prod[(1, 1)], 22.0);
    }

    #[test]
    fn determinant_and_inverse() {
        let m = sample();
        assert!((m.determinant().unwrap() - -2.0).abs() < 1e-12);
        let inv = m.inverse().unwrap();
        let id = m.mul(&inv).unwrap();
        assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
        assert!(id[(0, 1)].abs() < 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
        assert!(m.inverse().is_err());
    }

    #[test]
    fn non_square_operations_error() {
        let m = Matrix::zeros(2, 3);
        assert!(m.determinant().is_err());
        assert!(m.inverse().is_err());
        assert!(m.trace().is_err());
    }

    #[test]
    fn transpose_and_trace() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 3.0);
        assert_eq!(m.trace().unwrap(), 5.0);
    }
}
