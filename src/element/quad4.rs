//! 4-node quadrilateral with 2×2 Gauss integration.
//!
//! Bilinear shape functions in natural coordinates (ξ, η) ∈ [-1, 1]²:
//!
//! ```text
//! N_i = (1 + ξ_i·ξ)(1 + η_i·η) / 4
//! ```
//!
//! where (ξ_i, η_i) are ±1 for node i, numbered counterclockwise:
//!
//! ```text
//!     3-------2
//!     |       |
//!     |       |
//!     0-------1
//!
//! Node 0: (-1, -1)
//! Node 1: (+1, -1)
//! Node 2: (+1, +1)
//! Node 3: (-1, +1)
//! ```

use crate::element::gauss::{gauss_quad, GaussPoint};

/// Natural coordinates of each node: node i sits at (XI[i], ETA[i]).
const XI: [f64; 4] = [-1.0, 1.0, 1.0, -1.0];
const ETA: [f64; 4] = [-1.0, -1.0, 1.0, 1.0];

/// Number of nodes.
pub(crate) const N_NODES: usize = 4;

/// Number of Gauss points (2×2).
pub(crate) const N_GAUSS: usize = 4;

/// The fixed quadrature rule for this element type: 2×2 points at ±1/√3,
/// all weights 1.
pub(crate) fn gauss_rule() -> Vec<GaussPoint> {
    gauss_quad(2)
}

/// Shape-function values at (ξ, η).
pub(crate) fn shape_functions(xi: f64, eta: f64) -> [f64; 4] {
    let mut n = [0.0; 4];
    for i in 0..4 {
        n[i] = 0.25 * (1.0 + XI[i] * xi) * (1.0 + ETA[i] * eta);
    }
    n
}

/// Parametric derivatives (dN/dξ, dN/dη) per node at (ξ, η).
pub(crate) fn shape_derivatives(xi: f64, eta: f64) -> [[f64; 2]; 4] {
    let mut d = [[0.0; 2]; 4];
    for i in 0..4 {
        d[i][0] = 0.25 * XI[i] * (1.0 + ETA[i] * eta);
        d[i][1] = 0.25 * (1.0 + XI[i] * xi) * ETA[i];
    }
    d
}
