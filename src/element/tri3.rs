//! 3-node triangle with a single integration point.
//!
//! Linear shape functions on the unit reference triangle with vertices at
//! (0,0), (1,0), (0,1):
//!
//! ```text
//! N_0 = 1 - ξ - η
//! N_1 = ξ
//! N_2 = η
//! ```
//!
//! The parametric derivatives are constant, so one centroid Gauss point
//! (weight 1/2) integrates the linear map exactly.

use crate::element::gauss::{gauss_tri, GaussPoint};

/// Number of nodes.
pub(crate) const N_NODES: usize = 3;

/// Number of Gauss points.
pub(crate) const N_GAUSS: usize = 1;

/// The fixed quadrature rule for this element type.
pub(crate) fn gauss_rule() -> Vec<GaussPoint> {
    gauss_tri(N_GAUSS)
}

/// Shape-function values at (ξ, η).
pub(crate) fn shape_functions(xi: f64, eta: f64) -> [f64; 3] {
    [1.0 - xi - eta, xi, eta]
}

/// Parametric derivatives (dN/dξ, dN/dη) per node; constant over the element.
pub(crate) fn shape_derivatives() -> [[f64; 2]; 3] {
    [[-1.0, -1.0], [1.0, 0.0], [0.0, 1.0]]
}
