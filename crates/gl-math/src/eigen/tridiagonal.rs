//! Implicit-shift QR for symmetric tridiagonal matrices.
//!
//! Works on the diagonal / sub-diagonal vectors directly and accumulates the
//! Givens rotations into the eigenvector matrix, so the dense Jacobi matrix is
//! never formed.

use gl_core::{
    ensure,
    errors::{Error, Result},
};
use nalgebra::{DMatrix, DVector};

use super::{EigenDecomposition, SymmetricEigenSolver, DEFAULT_ITERATIONS_PER_POINT};
use crate::jacobi::JacobiMatrix;
use crate::scalar::RealScalar;

/// Symmetric tridiagonal QR solver with Wilkinson shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TridiagonalQrSolver {
    iterations_per_point: usize,
}

impl TridiagonalQrSolver {
    /// Create a solver allowing `iterations_per_point × n` iterations
    /// (deflations included) for an `n × n` matrix.
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

impl Default for TridiagonalQrSolver {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS_PER_POINT)
    }
}

impl SymmetricEigenSolver for TridiagonalQrSolver {
    fn decompose<T: RealScalar>(&self, matrix: &JacobiMatrix<T>) -> Result<EigenDecomposition<T>> {
        let n = matrix.dim();
        ensure!(n > 0, "cannot decompose an empty matrix");
        let mut diag = matrix.diagonal().to_vec();
        let mut off = matrix.sub_diagonal().to_vec();
        let max_iterations = self.iterations_per_point.saturating_mul(n);

        let (eigenvalues, eigenvectors, iterations) =
            symmetric_tridiagonal_qr(&mut diag, &mut off, max_iterations).ok_or_else(|| {
                log::warn!("tridiagonal QR: no convergence for {n}x{n} after {max_iterations} iterations");
                Error::EigenDecomposition(format!(
                    "tridiagonal QR did not converge for a {n}x{n} matrix within {max_iterations} iterations"
                ))
            })?;

        log::debug!("tridiagonal QR: decomposed {n}x{n} matrix in {iterations} iterations");
        Ok(EigenDecomposition {
            eigenvalues,
            eigenvectors,
        })
    }
}

/// Returns `(eigenvalues, eigenvectors, iterations)`, or `None` if the
/// budget runs out before every eigenvalue has deflated.
///
/// Column `i` of the eigenvector matrix belongs to eigenvalue `i`.
fn symmetric_tridiagonal_qr<T: RealScalar>(
    diag: &mut [T],
    off: &mut [T],
    max_iterations: usize,
) -> Option<(DVector<T>, DMatrix<T>, usize)> {
    let n = diag.len();
    let zero = T::zero();
    let one = T::one();
    let two: T = nalgebra::convert(2.0);
    let eps = T::default_epsilon();

    let mut z = DMatrix::<T>::identity(n, n);
    let mut m = n;
    let mut iterations = 0;

    while m > 1 {
        if iterations == max_iterations {
            return None;
        }
        iterations += 1;

        // Start of the unreduced block ending at row m - 1
        let mut l = m - 1;
        while l > 0 && off[l - 1].abs() > eps * (diag[l - 1].abs() + diag[l].abs()) {
            l -= 1;
        }

        if l == m - 1 {
            m -= 1;
            continue;
        }

        // Wilkinson shift
        let b = off[m - 2];
        let d = (diag[m - 2] - diag[m - 1]) / two;
        let mu = if d == zero {
            diag[m - 1] - b.abs()
        } else {
            diag[m - 1] - b * b / (d + d.signum() * (d * d + b * b).sqrt())
        };

        let mut x = diag[l] - mu;
        let mut y = off[l];

        for k in l..(m - 1) {
            // Givens rotation zeroing y against x
            let (c, s) = if x.abs() > y.abs() {
                let t = -y / x;
                let c = one / (one + t * t).sqrt();
                (c, c * t)
            } else if y != zero {
                let t = -x / y;
                let s = one / (one + t * t).sqrt();
                (s * t, s)
            } else {
                (one, zero)
            };

            let w = c * x - s * y;
            let dk = diag[k] - diag[k + 1];
            let shift = (two * c * off[k] + dk * s) * s;
            diag[k] -= shift;
            diag[k + 1] += shift;
            if k > l {
                off[k - 1] = w;
            }
            off[k] = dk * c * s + (c * c - s * s) * off[k];

            for j in 0..n {
                let t0 = z[(j, k)];
                let t1 = z[(j, k + 1)];
                z[(j, k)] = c * t0 - s * t1;
                z[(j, k + 1)] = s * t0 + c * t1;
            }

            x = off[k];
            if k < m - 2 {
                y = -s * off[k + 1];
                off[k + 1] *= c;
            }
        }
    }

    Some((DVector::from_column_slice(diag), z, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn already_diagonal() {
        let mut diag = vec![3.0, -1.0, 2.0];
        let mut off = vec![0.0, 0.0];
        let (values, vectors, _) = symmetric_tridiagonal_qr(&mut diag, &mut off, 100).unwrap();
        assert_eq!(values.as_slice(), &[3.0, -1.0, 2.0]);
        assert_eq!(vectors, DMatrix::<f64>::identity(3, 3));
    }

    #[test]
    fn three_point_legendre_spectrum() {
        let eig = TridiagonalQrSolver::default()
            .decompose(&JacobiMatrix::<f64>::legendre(3))
            .unwrap();
        let mut values: Vec<f64> = eig.eigenvalues.iter().copied().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(values[0], -(0.6_f64.sqrt()), epsilon = 1e-14);
        assert_relative_eq!(values[1], 0.0, epsilon = 1e-14);
        assert_relative_eq!(values[2], 0.6_f64.sqrt(), epsilon = 1e-14);
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        let err = TridiagonalQrSolver::new(1)
            .decompose(&JacobiMatrix::<f64>::legendre(10))
            .unwrap_err();
        assert!(matches!(err, Error::EigenDecomposition(_)));
    }

    #[test]
    fn single_precision() {
        let eig = TridiagonalQrSolver::default()
            .decompose(&JacobiMatrix::<f32>::legendre(2))
            .unwrap();
        let mut values: Vec<f32> = eig.eigenvalues.iter().copied().collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(values[1], 1.0 / 3.0_f32.sqrt(), epsilon = 1e-6);
    }
}
