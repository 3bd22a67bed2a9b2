//! Dense complex matrices for small channel spaces.
//!
//! The channel count N is 1–3 in every worked scenario, so the matrix
//! algebra is written out directly: row-major storage in a flat `Vec`,
//! Gauss-Jordan inversion with partial pivoting, and an LU-style
//! determinant. Branch-cut fidelity of the surrounding amplitude code
//! matters far more than asymptotic speed here, which is why no dense
//! linear-algebra crate is pulled in.

use std::ops::{Index, IndexMut};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::KmatError;

/// An N×N complex matrix, row-major in a flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl CMatrix {
    /// All-zero N×N matrix.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![Complex64::zero(); dim * dim],
        }
    }

    /// Identity matrix of size N.
    pub fn identity(dim: usize) -> Self {
        let mut mat = Self::zeros(dim);
        for i in 0..dim {
            mat[(i, i)] = Complex64::one();
        }
        mat
    }

    /// Matrix size N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Matrix product `self * other`. Both operands must be N×N.
    pub fn mul(&self, other: &CMatrix) -> CMatrix {
        assert_eq!(self.dim, other.dim, "matrix dimensions must agree");
        let n = self.dim;
        let mut out = CMatrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let aik = self[(i, k)];
                if aik.is_zero() {
                    continue;
                }
                for j in 0..n {
                    out[(i, j)] += aik * other[(k, j)];
                }
            }
        }
        out
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vec(&self, v: &[Complex64]) -> Vec<Complex64> {
        assert_eq!(self.dim, v.len(), "vector length must match matrix size");
        let n = self.dim;
        let mut out = vec![Complex64::zero(); n];
        for i in 0..n {
            for j in 0..n {
                out[i] += self[(i, j)] * v[j];
            }
        }
        out
    }

    /// Determinant via Gaussian elimination with partial pivoting.
    ///
    /// Row swaps flip the sign; the result is the product of the pivots.
    pub fn determinant(&self) -> Complex64 {
        let n = self.dim;
        let mut a = self.data.clone();
        let mut det = Complex64::one();
        for col in 0..n {
            let pivot_row = Self::select_pivot(&a, n, col);
            let pivot = a[pivot_row * n + col];
            if pivot.norm() == 0.0 {
                return Complex64::zero();
            }
            if pivot_row != col {
                for j in 0..n {
                    a.swap(col * n + j, pivot_row * n + j);
                }
                det = -det;
            }
            det *= pivot;
            for row in (col + 1)..n {
                let factor = a[row * n + col] / pivot;
                for j in col..n {
                    let sub = a[col * n + j] * factor;
                    a[row * n + j] -= sub;
                }
            }
        }
        det
    }

    /// Inverse via Gauss-Jordan elimination with partial pivoting.
    ///
    /// An exactly singular matrix (zero pivot column) reports
    /// [`KmatError::SingularDenominator`]; near-singular matrices are not
    /// clamped and simply produce entries of large magnitude.
    pub fn inverse(&self) -> Result<CMatrix, KmatError> {
        let n = self.dim;
        let mut a = self.data.clone();
        let mut inv = CMatrix::identity(n);
        for col in 0..n {
            let pivot_row = Self::select_pivot(&a, n, col);
            if a[pivot_row * n + col].norm() == 0.0 {
                return Err(KmatError::SingularDenominator);
            }
            if pivot_row != col {
                for j in 0..n {
                    a.swap(col * n + j, pivot_row * n + j);
                    inv.data.swap(col * n + j, pivot_row * n + j);
                }
            }
            let pivot = a[col * n + col];
            for j in 0..n {
                a[col * n + j] /= pivot;
                inv.data[col * n + j] /= pivot;
            }
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[row * n + col];
                if factor.is_zero() {
                    continue;
                }
                for j in 0..n {
                    let sub_a = a[col * n + j] * factor;
                    a[row * n + j] -= sub_a;
                    let sub_inv = inv.data[col * n + j] * factor;
                    inv.data[row * n + j] -= sub_inv;
                }
            }
        }
        Ok(inv)
    }

    /// Row index at or below `col` holding the largest pivot magnitude.
    fn select_pivot(a: &[Complex64], n: usize, col: usize) -> usize {
        let mut pivot_row = col;
        let mut pivot_norm = a[col * n + col].norm();
        for row in (col + 1)..n {
            let norm = a[row * n + col].norm();
            if norm > pivot_norm {
                pivot_row = row;
                pivot_norm = norm;
            }
        }
        pivot_row
    }
}

impl Index<(usize, usize)> for CMatrix {
    type Output = Complex64;

    fn index(&self, (i, j): (usize, usize)) -> &Complex64 {
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for CMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Complex64 {
        &mut self.data[i * self.dim + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn assert_close(a: Complex64, b: Complex64, tol: f64) {
        assert!(
            (a - b).norm() < tol,
            "expected {} ≈ {} (tol {})",
            a,
            b,
            tol
        );
    }

    #[test]
    fn identity_is_its_own_inverse() {
        let id = CMatrix::identity(3);
        let inv = id.inverse().unwrap();
        assert_eq!(inv, id);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let mut m = CMatrix::zeros(3);
        m[(0, 0)] = c(1.0, 0.5);
        m[(0, 1)] = c(-0.3, 1.1);
        m[(0, 2)] = c(0.2, 0.0);
        m[(1, 0)] = c(0.0, -0.7);
        m[(1, 1)] = c(2.0, 0.1);
        m[(1, 2)] = c(0.4, 0.4);
        m[(2, 0)] = c(1.5, 0.0);
        m[(2, 1)] = c(0.6, -0.2);
        m[(2, 2)] = c(-1.0, 0.9);

        let prod = m.inverse().unwrap().mul(&m);
        let id = CMatrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_close(prod[(i, j)], id[(i, j)], 1e-12);
            }
        }
    }

    #[test]
    fn two_by_two_determinant_matches_cofactor_formula() {
        let mut m = CMatrix::zeros(2);
        m[(0, 0)] = c(1.0, 2.0);
        m[(0, 1)] = c(0.0, -1.0);
        m[(1, 0)] = c(3.0, 0.0);
        m[(1, 1)] = c(-2.0, 0.5);

        let expected = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
        assert_close(m.determinant(), expected, 1e-12);
    }

    #[test]
    fn singular_matrix_is_reported() {
        // Second row is a multiple of the first.
        let mut m = CMatrix::zeros(2);
        m[(0, 0)] = c(1.0, 1.0);
        m[(0, 1)] = c(2.0, 0.0);
        m[(1, 0)] = c(2.0, 2.0);
        m[(1, 1)] = c(4.0, 0.0);

        assert_eq!(m.inverse(), Err(KmatError::SingularDenominator));
        assert_close(m.determinant(), Complex64::zero(), 1e-12);
    }

    #[test]
    fn pivoting_handles_zero_leading_entry() {
        let mut m = CMatrix::zeros(2);
        m[(0, 0)] = c(0.0, 0.0);
        m[(0, 1)] = c(1.0, 0.0);
        m[(1, 0)] = c(1.0, 0.0);
        m[(1, 1)] = c(0.0, 0.0);

        let inv = m.inverse().unwrap();
        // The inverse of a swap is the swap itself.
        assert_close(inv[(0, 1)], c(1.0, 0.0), 1e-12);
        assert_close(inv[(1, 0)], c(1.0, 0.0), 1e-12);
        assert_close(m.determinant(), c(-1.0, 0.0), 1e-12);
    }

    #[test]
    fn one_by_one_inverse_is_reciprocal() {
        let mut m = CMatrix::zeros(1);
        m[(0, 0)] = c(0.0, 2.0);
        let inv = m.inverse().unwrap();
        assert_close(inv[(0, 0)], c(0.0, -0.5), 1e-12);
    }

    #[test]
    fn mul_vec_matches_manual_expansion() {
        let mut m = CMatrix::zeros(2);
        m[(0, 0)] = c(1.0, 0.0);
        m[(0, 1)] = c(0.0, 1.0);
        m[(1, 0)] = c(2.0, 0.0);
        m[(1, 1)] = c(0.0, -1.0);
        let v = vec![c(1.0, 1.0), c(2.0, 0.0)];

        let out = m.mul_vec(&v);
        assert_close(out[0], c(1.0, 1.0) + c(0.0, 2.0), 1e-12);
        assert_close(out[1], c(2.0, 2.0) + c(0.0, -2.0), 1e-12);
    }
}
