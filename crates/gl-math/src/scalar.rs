//! Floating-point scalar bound.
//!
//! Quadrature rules are only defined over IEEE-754 floating-point types. The
//! [`RealScalar`] trait is sealed and implemented for `f32` and `f64`, so a
//! request for e.g. `gauss_legendre::<i32>(3)` is rejected at compile time.

use nalgebra::RealField;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point type the quadrature generator can work in.
///
/// All arithmetic (including the square roots of the Jacobi sub-diagonal and
/// the eigen-decomposition) happens in `Self`; nothing is widened to `f64`
/// behind the caller's back.
pub trait RealScalar: RealField + Copy + sealed::Sealed {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
