//! Symmetric eigen-decomposition of Jacobi matrices.
//!
//! The quadrature generator only needs one capability: given a real symmetric
//! tridiagonal matrix, return its eigenvalues and orthonormal eigenvectors or
//! report failure. [`SymmetricEigenSolver`] is that seam; two solvers are
//! provided:
//!
//! * [`DenseEigenSolver`] – nalgebra's dense `SymmetricEigen`.
//! * [`TridiagonalQrSolver`] – implicit-shift QR working directly on the
//!   diagonal and sub-diagonal.

mod dense;
mod tridiagonal;

pub use dense::DenseEigenSolver;
pub use tridiagonal::TridiagonalQrSolver;

use gl_core::errors::Result;
use nalgebra::{DMatrix, DVector};

use crate::jacobi::JacobiMatrix;
use crate::scalar::RealScalar;

/// Default iteration budget, per matrix row.
pub const DEFAULT_ITERATIONS_PER_POINT: usize = 100;

/// Eigenvalues and eigenvectors of a symmetric matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition<T> {
    /// Eigenvalues, in solver order.
    pub eigenvalues: DVector<T>,
    /// Orthonormal eigenvectors; column `i` belongs to `eigenvalues[i]`.
    pub eigenvectors: DMatrix<T>,
}

impl<T: RealScalar> EigenDecomposition<T> {
    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Return `true` if there are no eigenpairs.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Return `true` if every eigenvalue and eigenvector entry is finite.
    pub fn is_finite(&self) -> bool {
        self.eigenvalues.iter().all(|v| v.is_finite())
            && self.eigenvectors.iter().all(|v| v.is_finite())
    }
}

/// A solver for real symmetric (tridiagonal) eigenproblems.
pub trait SymmetricEigenSolver {
    /// Decompose `matrix`.
    ///
    /// Returns `Error::EigenDecomposition` if the iteration does not converge
    /// within the solver's budget.
    fn decompose<T: RealScalar>(&self, matrix: &JacobiMatrix<T>) -> Result<EigenDecomposition<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn check_solver<S: SymmetricEigenSolver>(solver: &S) {
        let j = JacobiMatrix::<f64>::legendre(6);
        let dense = {
            let lower = j.to_lower_dense();
            &lower + lower.transpose()
        };
        let eig = solver.decompose(&j).unwrap();
        assert_eq!(eig.len(), 6);
        assert!(eig.is_finite());

        // A v = λ v for every pair
        for i in 0..eig.len() {
            let v = eig.eigenvectors.column(i).into_owned();
            let av = &dense * &v;
            for r in 0..6 {
                assert_relative_eq!(av[r], eig.eigenvalues[i] * v[r], epsilon = 1e-12);
            }
        }

        // Vᵀ V = I
        let gram = eig.eigenvectors.transpose() * &eig.eigenvectors;
        for r in 0..6 {
            for c in 0..6 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(gram[(r, c)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn dense_solver_eigenpairs() {
        check_solver(&DenseEigenSolver::default());
    }

    #[test]
    fn tridiagonal_solver_eigenpairs() {
        check_solver(&TridiagonalQrSolver::default());
    }

    #[test]
    fn solvers_agree_on_spectrum() {
        let j = JacobiMatrix::<f64>::legendre(9);
        let mut a: Vec<f64> = DenseEigenSolver::default()
            .decompose(&j)
            .unwrap()
            .eigenvalues
            .iter()
            .copied()
            .collect();
        let mut b: Vec<f64> = TridiagonalQrSolver::default()
            .decompose(&j)
            .unwrap()
            .eigenvalues
            .iter()
            .copied()
            .collect();
        a.sort_by(|x, y| x.partial_cmp(y).unwrap());
        b.sort_by(|x, y| x.partial_cmp(y).unwrap());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-13);
        }
    }
}
