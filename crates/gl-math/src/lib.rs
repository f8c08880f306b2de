//! # gl-math
//!
//! Gauss-Legendre quadrature: the Legendre Jacobi matrix, symmetric
//! eigen-solvers (a dense one over nalgebra and a tridiagonal implicit-QR
//! one), and the Golub-Welsch rule generator built on top of them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Symmetric eigen-decomposition of Jacobi matrices.
pub mod eigen;

/// Gaussian quadrature rules.
pub mod integrals;

/// The Legendre Jacobi (recurrence) matrix.
pub mod jacobi;

/// Scalar types accepted by the quadrature generator.
pub mod scalar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use eigen::{DenseEigenSolver, EigenDecomposition, SymmetricEigenSolver, TridiagonalQrSolver};
pub use integrals::gauss_legendre::{
    gauss_legendre, gauss_legendre_fixed, GaussLegendre, GaussLegendreRule, QuadratureOrder,
};
pub use jacobi::JacobiMatrix;
pub use scalar::RealScalar;
