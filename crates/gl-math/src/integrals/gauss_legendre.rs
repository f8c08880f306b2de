//! Gauss-Legendre quadrature on (−1, 1) via the Golub-Welsch algorithm.
//!
//! For `n` points the nodes are the eigenvalues of the `n × n` Legendre
//! Jacobi matrix and the weight of node `xᵢ` is `2 vᵢ,₀²`, where `vᵢ` is the
//! matching normalised eigenvector and `2 = ∫₋₁¹ dx`. The rule integrates
//! every polynomial of degree `≤ 2n − 1` exactly.
//!
//! ```
//! use gl_math::gauss_legendre;
//!
//! let rule = gauss_legendre::<f64>(3).unwrap();
//! // ∫₋₁¹ x⁴ dx = 2/5
//! assert!((rule.integrate(|x| x.powi(4)) - 0.4).abs() < 1e-14);
//! ```

use std::cmp::Ordering;

use gl_core::{
    ensure_post,
    errors::{Error, Result},
    Real,
};
use num_traits::ToPrimitive;

use crate::comparison::close;
use crate::eigen::{DenseEigenSolver, SymmetricEigenSolver};
use crate::jacobi::JacobiMatrix;
use crate::scalar::RealScalar;

// ═══════════════════════════════════════════════════════════════════════════════
// Point count
// ═══════════════════════════════════════════════════════════════════════════════

/// Number of quadrature points, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuadratureOrder(usize);

impl QuadratureOrder {
    /// Validate a point count.
    pub fn new(points: usize) -> Result<Self> {
        Self::try_from(points)
    }

    /// The point count.
    pub fn get(self) -> usize {
        self.0
    }
}

macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for QuadratureOrder {
                type Error = Error;

                fn try_from(value: $t) -> Result<Self> {
                    match value.to_usize() {
                        Some(n) if n > 0 => Ok(Self(n)),
                        _ => Err(Error::InvalidPointCount(value as i128)),
                    }
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, i64, isize, u32, u64, usize);

// ═══════════════════════════════════════════════════════════════════════════════
// Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Gauss-Legendre nodes and weights on (−1, 1).
///
/// Nodes are sorted ascending; `weights()[i]` belongs to `nodes()[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussLegendreRule<T = Real> {
    nodes: Vec<T>,
    weights: Vec<T>,
}

impl<T: RealScalar> GaussLegendreRule<T> {
    /// Quadrature nodes.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Quadrature weights.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of quadrature points.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// `(node, weight)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }

    /// Evaluate ∫₋₁¹ f(x) dx ≈ Σ wᵢ f(xᵢ).
    pub fn integrate<F: Fn(T) -> T>(&self, f: F) -> T {
        self.iter().fold(T::zero(), |acc, (x, w)| acc + w * f(x))
    }

    /// Return `true` if nodes mirror about zero and mirrored weights agree,
    /// both within `tolerance`.
    pub fn is_symmetric(&self, tolerance: T) -> bool {
        let n = self.order();
        (0..n / 2 + n % 2).all(|i| {
            let j = n - 1 - i;
            close(self.nodes[i], -self.nodes[j], tolerance)
                && close(self.weights[i], self.weights[j], tolerance)
        })
    }

    /// Split into `(nodes, weights)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.nodes, self.weights)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Generator
// ═══════════════════════════════════════════════════════════════════════════════

/// Golub-Welsch generator for Gauss-Legendre rules.
///
/// Holds no state besides the eigen-solver configuration; `compute` is pure
/// and may be called concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussLegendre<S = DenseEigenSolver> {
    solver: S,
}

impl GaussLegendre {
    /// Generator using the dense nalgebra eigensolver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SymmetricEigenSolver> GaussLegendre<S> {
    /// Generator using `solver` for the Jacobi eigenproblem.
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// The configured eigen-solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Compute the `points`-point rule in precision `T`.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidPointCount` if `points < 1`.
    /// * `Error::EigenDecomposition` if the solver fails or returns
    ///   non-finite values.
    pub fn compute<T: RealScalar>(
        &self,
        points: impl TryInto<QuadratureOrder, Error = Error>,
    ) -> Result<GaussLegendreRule<T>> {
        let n = points.try_into()?.get();
        let two: T = nalgebra::convert(2.0);

        if n == 1 {
            return Ok(GaussLegendreRule {
                nodes: vec![T::zero()],
                weights: vec![two],
            });
        }

        let eigen = self.solver.decompose(&JacobiMatrix::<T>::legendre(n))?;
        ensure_post!(
            eigen.len() == n && eigen.eigenvectors.shape() == (n, n),
            "expected {n} eigenpairs, got {} values and a {:?} vector matrix",
            eigen.len(),
            eigen.eigenvectors.shape()
        );
        if !eigen.is_finite() {
            return Err(Error::EigenDecomposition(format!(
                "non-finite eigenpairs for {n} points"
            )));
        }

        let mut pairs: Vec<(T, T)> = (0..n)
            .map(|i| {
                let v0 = eigen.eigenvectors[(0, i)];
                (eigen.eigenvalues[i], two * v0 * v0)
            })
            .collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let (nodes, weights) = pairs.into_iter().unzip();

        Ok(GaussLegendreRule { nodes, weights })
    }
}

/// Compute the `points`-point Gauss-Legendre rule with the default generator.
///
/// # Example
/// ```
/// use gl_core::Error;
/// use gl_math::gauss_legendre;
///
/// let (nodes, weights) = gauss_legendre::<f64>(1).unwrap().into_parts();
/// assert_eq!((nodes, weights), (vec![0.0], vec![2.0]));
/// assert_eq!(gauss_legendre::<f64>(0), Err(Error::InvalidPointCount(0)));
/// ```
pub fn gauss_legendre<T: RealScalar>(
    points: impl TryInto<QuadratureOrder, Error = Error>,
) -> Result<GaussLegendreRule<T>> {
    GaussLegendre::new().compute(points)
}

struct NonZeroPoints<const N: usize>;

impl<const N: usize> NonZeroPoints<N> {
    const CHECK: () = assert!(N > 0, "a Gauss-Legendre rule needs at least one point");
}

/// Compile-time point count variant of [`gauss_legendre`].
///
/// `N = 0` fails to compile.
///
/// ```
/// let (x, w) = gl_math::gauss_legendre_fixed::<f64, 2>().unwrap();
/// assert!((x[1] - 1.0 / 3.0_f64.sqrt()).abs() < 1e-15);
/// assert!((w[0] - 1.0).abs() < 1e-15);
/// ```
pub fn gauss_legendre_fixed<T: RealScalar, const N: usize>() -> Result<([T; N], [T; N])> {
    #[allow(clippy::let_unit_value)]
    let () = NonZeroPoints::<N>::CHECK;

    let rule = gauss_legendre::<T>(N)?;
    let mut nodes = [T::zero(); N];
    let mut weights = [T::zero(); N];
    nodes.copy_from_slice(rule.nodes());
    weights.copy_from_slice(rule.weights());
    Ok((nodes, weights))
}
