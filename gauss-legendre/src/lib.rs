//! # gauss-legendre
//!
//! Gauss-Legendre quadrature nodes and weights on (−1, 1), computed from the
//! eigen-decomposition of the Legendre Jacobi matrix (Golub-Welsch).
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! gauss-legendre = "0.1"
//! ```
//!
//! ```rust
//! use gauss_legendre::math::gauss_legendre;
//!
//! let rule = gauss_legendre::<f64>(5).unwrap();
//! // exact for polynomials up to degree 9
//! let integral = rule.integrate(|x| x.powi(8) - x.powi(3));
//! assert!((integral - 2.0 / 9.0).abs() < 1e-14);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use gl_core as core;

/// Jacobi matrix, eigen-solvers, and the quadrature generator.
pub use gl_math as math;
