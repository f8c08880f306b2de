//! Comparison utilities.

use crate::scalar::RealScalar;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close<T: RealScalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
#[inline]
pub fn close_enough<T: RealScalar>(a: T, b: T, n: u32) -> bool {
    if a == b {
        return true;
    }
    let scale: T = nalgebra::convert(f64::from(n));
    let eps = a.abs().max(b.abs()) * T::default_epsilon() * scale;
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_basic() {
        assert!(close(1.0, 1.0 + 1e-11, 1e-10));
        assert!(!close(1.0, 1.0 + 1e-9, 1e-10));
        assert!(close(1.0_f32, 1.0 + 1e-6, 1e-5));
    }

    #[test]
    fn close_enough_basic() {
        assert!(close_enough(1.0, 1.0, 10));
        assert!(close_enough(1.0, 1.0 + f64::EPSILON * 5.0, 10));
        assert!(!close_enough(1.0, 1.0 + 1e-10, 10));
        assert!(close_enough(0.5_f32, 0.5 + f32::EPSILON, 4));
    }
}
