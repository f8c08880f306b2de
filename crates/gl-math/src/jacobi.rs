//! Jacobi matrix of the Legendre three-term recurrence.
//!
//! The orthonormal Legendre polynomials satisfy
//! `x p̃ₖ(x) = bₖ₊₁ p̃ₖ₊₁(x) + bₖ p̃ₖ₋₁(x)` with `bₖ = k / √(4k² − 1)`, so the
//! Jacobi matrix has a zero diagonal and `bₖ` on the sub-/super-diagonal. Its
//! eigenvalues are the Gauss-Legendre nodes (Golub-Welsch).

use nalgebra::DMatrix;

use crate::scalar::RealScalar;

/// Symmetric tridiagonal Jacobi matrix, stored as its diagonal and
/// sub-diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct JacobiMatrix<T> {
    diagonal: Vec<T>,
    sub_diagonal: Vec<T>,
}

impl<T: RealScalar> JacobiMatrix<T> {
    /// Legendre Jacobi matrix of dimension `n`.
    ///
    /// `n = 0` yields an empty matrix.
    pub fn legendre(n: usize) -> Self {
        let one = T::one();
        let four: T = nalgebra::convert(4.0);
        let mut k = T::zero();
        let sub_diagonal = (1..n)
            .map(|_| {
                k += one;
                k / (four * k * k - one).sqrt()
            })
            .collect();
        Self {
            diagonal: vec![T::zero(); n],
            sub_diagonal,
        }
    }

    /// Dimension of the (square) matrix.
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Diagonal entries (all zero for Legendre).
    pub fn diagonal(&self) -> &[T] {
        &self.diagonal
    }

    /// Sub-diagonal entries `b₁ … bₙ₋₁`.
    pub fn sub_diagonal(&self) -> &[T] {
        &self.sub_diagonal
    }

    /// Materialise as a dense matrix.
    ///
    /// Only the diagonal and the sub-diagonal (the lower triangle) are
    /// populated; symmetric solvers read nothing else.
    pub fn to_lower_dense(&self) -> DMatrix<T> {
        let n = self.dim();
        let mut m = DMatrix::<T>::zeros(n, n);
        for (i, &d) in self.diagonal.iter().enumerate() {
            m[(i, i)] = d;
        }
        for (k, &b) in self.sub_diagonal.iter().enumerate() {
            m[(k + 1, k)] = b;
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn legendre_sub_diagonal() {
        let j = JacobiMatrix::<f64>::legendre(4);
        assert_eq!(j.dim(), 4);
        assert_eq!(j.diagonal(), &[0.0; 4]);
        let b = j.sub_diagonal();
        assert_eq!(b.len(), 3);
        assert_relative_eq!(b[0], 1.0 / 3.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(b[1], 2.0 / 15.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(b[2], 3.0 / 35.0_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn lower_dense_layout() {
        let m = JacobiMatrix::<f64>::legendre(3).to_lower_dense();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);
        assert!(m[(1, 0)] > 0.0 && m[(2, 1)] > 0.0);
        // upper triangle left empty
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(1, 2)], 0.0);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn single_precision() {
        let j = JacobiMatrix::<f32>::legendre(2);
        assert_relative_eq!(j.sub_diagonal()[0], 1.0 / 3.0_f32.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(JacobiMatrix::<f64>::legendre(0).dim(), 0);
        let one = JacobiMatrix::<f64>::legendre(1);
        assert_eq!(one.dim(), 1);
        assert!(one.sub_diagonal().is_empty());
    }
}
