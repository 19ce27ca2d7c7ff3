//! 4-node tetrahedron with a single integration point.
//!
//! Linear shape functions on the unit reference tetrahedron with vertices at
//! (0,0,0), (1,0,0), (0,1,0), (0,0,1):
//!
//! ```text
//! N_0 = 1 - ξ - η - ζ
//! N_1 = ξ
//! N_2 = η
//! N_3 = ζ
//! ```
//!
//! The parametric derivatives are constant, so one centroid Gauss point
//! (weight 1/6) integrates the linear map exactly.

use crate::element::gauss::{gauss_tet, GaussPoint};

/// Number of nodes.
pub(crate) const N_NODES: usize = 4;

/// Number of Gauss points.
pub(crate) const N_GAUSS: usize = 1;

/// The fixed quadrature rule for this element type.
pub(crate) fn gauss_rule() -> Vec<GaussPoint> {
    gauss_tet(N_GAUSS)
}

/// Shape-function values at (ξ, η, ζ).
pub(crate) fn shape_functions(xi: f64, eta: f64, zeta: f64) -> [f64; 4] {
    [1.0 - xi - eta - zeta, xi, eta, zeta]
}

/// Parametric derivatives (dN/dξ, dN/dη, dN/dζ) per node; constant over the
/// element.
pub(crate) fn shape_derivatives() -> [[f64; 3]; 4] {
    [
        [-1.0, -1.0, -1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tet4_partition_of_unity() {
        for &(xi, eta, zeta) in &[(0.1, 0.2, 0.3), (0.25, 0.25, 0.25), (0.0, 0.0, 0.0)] {
            let n = shape_functions(xi, eta, zeta);
            assert_relative_eq!(n.iter().sum::<f64>(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_tet4_kronecker_delta_at_nodes() {
        let nodes = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
        ];
        for (a, &(xi, eta, zeta)) in nodes.iter().enumerate() {
            let n = shape_functions(xi, eta, zeta);
            for (b, &value) in n.iter().enumerate() {
                let expected = if a == b { 1.0 } else { 0.0 };
                assert_relative_eq!(value, expected, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_tet4_derivatives_sum_to_zero() {
        let d = shape_derivatives();
        for i in 0..3 {
            let sum: f64 = d.iter().map(|row| row[i]).sum();
            assert_relative_eq!(sum, 0.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_tet4_rule_is_centroid() {
        let rule = gauss_rule();
        assert_eq!(rule.len(), N_GAUSS);
        assert_relative_eq!(rule[0].xi(), 0.25, epsilon = 1e-14);
        assert_relative_eq!(rule[0].eta(), 0.25, epsilon = 1e-14);
        assert_relative_eq!(rule[0].zeta(), 0.25, epsilon = 1e-14);
        assert_relative_eq!(rule[0].weight(), 1.0 / 6.0, epsilon = 1e-14);
    }
}
