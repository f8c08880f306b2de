//! Dense symmetric eigen-decomposition over nalgebra.

use gl_core::{
    ensure,
    errors::{Error, Result},
};
use nalgebra::linalg::SymmetricEigen;

use super::{EigenDecomposition, SymmetricEigenSolver, DEFAULT_ITERATIONS_PER_POINT};
use crate::jacobi::JacobiMatrix;
use crate::scalar::RealScalar;

/// Solver backed by `nalgebra::linalg::SymmetricEigen`.
///
/// The Jacobi matrix is materialised with its lower triangle only, which is
/// all nalgebra reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseEigenSolver {
    iterations_per_point: usize,
}

impl DenseEigenSolver {
    /// Create a solver allowing `iterations_per_point × n` QR sweeps for an
    /// `n × n` matrix.
    pub fn new(iterations_per_point: usize) -> Self {
        Self {
            iterations_per_point,
        }
    }

    /// Iteration budget per matrix row.
    pub fn iterations_per_point(&self) -> usize {
        self.iterations_per_point
    }
}

impl Default for DenseEigenSolver {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS_PER_POINT)
    }
}

impl SymmetricEigenSolver for DenseEigenSolver {
    fn decompose<T: RealScalar>(&self, matrix: &JacobiMatrix<T>) -> Result<EigenDecomposition<T>> {
        let n = matrix.dim();
        ensure!(n > 0, "cannot decompose an empty matrix");
        ensure!(
            self.iterations_per_point > 0,
            "iteration budget must be positive"
        );

        let max_iterations = self.iterations_per_point.saturating_mul(n);
        let eigen = SymmetricEigen::try_new(
            matrix.to_lower_dense(),
            T::default_epsilon(),
            max_iterations,
        )
        .ok_or_else(|| {
            log::warn!("dense symmetric eigensolver: no convergence for {n}x{n} after {max_iterations} iterations");
            Error::EigenDecomposition(format!(
                "dense solver did not converge for a {n}x{n} matrix within {max_iterations} iterations"
            ))
        })?;

        log::debug!("dense symmetric eigensolver: decomposed {n}x{n} matrix");
        Ok(EigenDecomposition {
            eigenvalues: eigen.eigenvalues,
            eigenvectors: eigen.eigenvectors,
        })
    }
}
