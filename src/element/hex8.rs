//! 8-node hexahedron with 2×2×2 Gauss integration.
//!
//! Trilinear shape functions in natural coordinates (ξ, η, ζ) ∈ [-1, 1]³:
//!
//! ```text
//! N_i = (1 + ξ_i·ξ)(1 + η_i·η)(1 + ζ_i·ζ) / 8
//! ```
//!
//! where (ξ_i, η_i, ζ_i) are ±1 for node i. Standard node numbering
//! (counterclockwise when viewed from outside):
//!
//! ```text
//!        7-------6
//!       /|      /|
//!      / |     / |
//!     4-------5  |
//!     |  3----|--2
//!     | /     | /
//!     |/      |/
//!     0-------1
//! ```

use crate::element::gauss::{gauss_hex, GaussPoint};

/// Natural coordinates of each node: node i sits at (XI[i], ETA[i], ZETA[i]).
const XI: [f64; 8] = [-1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0];
const ETA: [f64; 8] = [-1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0];
const ZETA: [f64; 8] = [-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0];

/// Number of nodes.
pub(crate) const N_NODES: usize = 8;

/// Number of Gauss points (2×2×2).
pub(crate) const N_GAUSS: usize = 8;

/// The fixed quadrature rule for this element type: 2×2×2 points at ±1/√3,
/// all weights 1.
pub(crate) fn gauss_rule() -> Vec<GaussPoint> {
    gauss_hex(2)
}

/// Shape-function values at (ξ, η, ζ).
pub(crate) fn shape_functions(xi: f64, eta: f64, zeta: f64) -> [f64; 8] {
    let mut n = [0.0; 8];
    for i in 0..8 {
        n[i] = 0.125 * (1.0 + XI[i] * xi) * (1.0 + ETA[i] * eta) * (1.0 + ZETA[i] * zeta);
    }
    n
}

/// Parametric derivatives (dN/dξ, dN/dη, dN/dζ) per node at (ξ, η, ζ).
pub(crate) fn shape_derivatives(xi: f64, eta: f64, zeta: f64) -> [[f64; 3]; 8] {
    let mut d = [[0.0; 3]; 8];
    for i in 0..8 {
        d[i][0] = 0.125 * XI[i] * (1.0 + ETA[i] * eta) * (1.0 + ZETA[i] * zeta);
        d[i][1] = 0.125 * (1.0 + XI[i] * xi) * ETA[i] * (1.0 + ZETA[i] * zeta);
        d[i][2] = 0.125 * (1.0 + XI[i] * xi) * (1.0 + ETA[i] * eta) * ZETA[i];
    }
    d
}
