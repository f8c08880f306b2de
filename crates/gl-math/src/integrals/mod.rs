//! Gaussian quadrature rules.
//!
//! Only the Legendre family on (−1, 1) is provided; mapping a rule onto an
//! arbitrary interval is left to the caller.

pub mod gauss_legendre;
