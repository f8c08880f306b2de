//! # gl-core
//!
//! Core types and error definitions for gauss-legendre-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – the scalar type aliases, the error hierarchy, and the
//! `ensure!` / `ensure_post!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Default floating-point type (double precision).
pub type Real = f64;

/// Alias used for point counts and indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
