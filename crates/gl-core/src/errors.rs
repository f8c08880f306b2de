//! Error types for gauss-legendre-rs.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report. Precondition and postcondition checks go through the `ensure!` and
//! `ensure_post!` convenience macros defined here.

use thiserror::Error;

/// The top-level error type used throughout gauss-legendre-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The requested number of quadrature points is not a positive integer.
    #[error("invalid point count {0}: at least one quadrature point is required")]
    InvalidPointCount(i128),

    /// The symmetric eigen-decomposition did not converge or produced
    /// non-finite values.
    #[error("eigen-decomposition failed: {0}")]
    EigenDecomposition(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),
}

/// Shorthand `Result` type used throughout gauss-legendre-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gl_core::{ensure, errors::Error};
/// fn positive(x: f64) -> gl_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gl_core::{ensure_post, errors::Error};
/// fn halve(x: f64) -> gl_core::errors::Result<f64> {
///     let result = x / 2.0;
///     ensure_post!(result.is_finite(), "result must be finite, got {result}");
///     Ok(result)
/// }
/// assert!(halve(1.0).is_ok());
/// assert!(matches!(halve(f64::NAN), Err(Error::Postcondition(_))));
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
