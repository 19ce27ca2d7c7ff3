//! Gauss quadrature points and rules for numerical integration.
//!
//! A [`GaussPoint`] holds one integration location and weight, plus the
//! per-point state derived from the owning element's coordinates: cached
//! shape-function values, shape-function gradients with respect to both the
//! reference and the current configuration, and the two Jacobian
//! determinants. The caches are filled by the element's gradient passes.
//!
//! The free functions provide the standard rules:
//! - [`gauss_1d`] — Gauss-Legendre on [-1, 1]
//! - [`gauss_tri`] — unit triangle in natural coordinates (ξ, η)
//! - [`gauss_quad`] / [`gauss_hex`] — tensor products of the 1D rule
//! - [`gauss_tet`] — unit tetrahedron
//!
//! Weights are scaled to the reference-domain measure, so for any rule
//! Σ wᵢ equals the reference area/volume (1/2 for the triangle, 1/6 for the
//! tetrahedron, 4 for the square, 8 for the cube).

use nalgebra::DMatrix;

use crate::types::Frame;

/// One quadrature point with its per-point kinematic caches.
///
/// Created once per element instantiation (count and locations are fixed
/// properties of the element type); the caches are overwritten by every
/// gradient recomputation and live as long as the element.
#[derive(Debug, Clone)]
pub struct GaussPoint {
    /// Parametric coordinates (ξ, η, ζ); ζ = 0 for 2D rules.
    coords: [f64; 3],
    /// Integration weight.
    weight: f64,
    /// Shape-function values N_a at this point, one per node.
    pub(crate) shape: Vec<f64>,
    /// Gradients dN_a/dX w.r.t. reference coordinates, (node × dim).
    pub(crate) grad_ref: DMatrix<f64>,
    /// Gradients dN_a/dx w.r.t. current coordinates, (node × dim).
    pub(crate) grad_cur: DMatrix<f64>,
    /// Jacobian determinant in the reference configuration.
    pub(crate) det_jac_ref: f64,
    /// Jacobian determinant in the current configuration.
    pub(crate) det_jac_cur: f64,
}

impl GaussPoint {
    /// Create a new Gauss point with empty caches.
    pub fn new(coords: [f64; 3], weight: f64) -> Self {
        Self {
            coords,
            weight,
            shape: Vec::new(),
            grad_ref: DMatrix::zeros(0, 0),
            grad_cur: DMatrix::zeros(0, 0),
            det_jac_ref: 0.0,
            det_jac_cur: 0.0,
        }
    }

    /// Size the caches for an element with `n_nodes` nodes in `n_dim`
    /// dimensions.
    pub(crate) fn allocate(&mut self, n_nodes: usize, n_dim: usize) {
        self.shape = vec![0.0; n_nodes];
        self.grad_ref = DMatrix::zeros(n_nodes, n_dim);
        self.grad_cur = DMatrix::zeros(n_nodes, n_dim);
    }

    /// Parametric coordinates (ξ, η, ζ).
    pub fn coords(&self) -> [f64; 3] {
        self.coords
    }

    /// ξ (first parametric coordinate).
    #[inline]
    pub fn xi(&self) -> f64 {
        self.coords[0]
    }

    /// η (second parametric coordinate).
    #[inline]
    pub fn eta(&self) -> f64 {
        self.coords[1]
    }

    /// ζ (third parametric coordinate).
    #[inline]
    pub fn zeta(&self) -> f64 {
        self.coords[2]
    }

    /// Integration weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Cached shape-function value N_a for node `node`.
    pub fn shape_value(&self, node: usize) -> f64 {
        self.shape[node]
    }

    /// Cached Jacobian determinant for the given configuration.
    ///
    /// Validity is tracked by the owning element; read through
    /// [`Element::jacobian_det`](crate::element::Element::jacobian_det) for
    /// the checked form.
    pub fn jacobian_det(&self, frame: Frame) -> f64 {
        match frame {
            Frame::Reference => self.det_jac_ref,
            Frame::Current => self.det_jac_cur,
        }
    }

    /// Cached shape-function gradient component for node `node` along
    /// dimension `dim` in the given configuration.
    pub fn gradient(&self, frame: Frame, node: usize, dim: usize) -> f64 {
        match frame {
            Frame::Reference => self.grad_ref[(node, dim)],
            Frame::Current => self.grad_cur[(node, dim)],
        }
    }
}

/// 1D Gauss-Legendre quadrature points and weights on [-1, 1].
///
/// # Panics
///
/// Panics if `n` is not 1, 2, or 3.
pub fn gauss_1d(n: usize) -> Vec<(f64, f64)> {
    match n {
        1 => vec![(0.0, 2.0)],
        2 => {
            let p = 1.0 / 3.0_f64.sqrt();
            vec![(-p, 1.0), (p, 1.0)]
        }
        3 => {
            let p = (3.0 / 5.0_f64).sqrt();
            vec![(-p, 5.0 / 9.0), (0.0, 8.0 / 9.0), (p, 5.0 / 9.0)]
        }
        _ => panic!("gauss_1d: n must be 1, 2, or 3, got {}", n),
    }
}

/// Triangle quadrature on the unit triangle with vertices (0,0), (1,0), (0,1).
///
/// Points are given as (ξ, η); weights sum to the reference area 1/2.
///
/// # Panics
///
/// Panics if `n` is not 1 or 3.
pub fn gauss_tri(n: usize) -> Vec<GaussPoint> {
    match n {
        1 => {
            // Centroid rule, degree 1.
            vec![GaussPoint::new([1.0 / 3.0, 1.0 / 3.0, 0.0], 0.5)]
        }
        3 => {
            // Edge-midpoint rule, degree 2.
            let w = 1.0 / 6.0;
            vec![
                GaussPoint::new([0.5, 0.0, 0.0], w),
                GaussPoint::new([0.5, 0.5, 0.0], w),
                GaussPoint::new([0.0, 0.5, 0.0], w),
            ]
        }
        _ => panic!("gauss_tri: n must be 1 or 3, got {}", n),
    }
}

/// Quadrilateral quadrature on ξ, η ∈ [-1, 1], tensor product of [`gauss_1d`].
///
/// `n` is the number of points per direction; returns n² points whose
/// weights sum to the reference area 4.
pub fn gauss_quad(n: usize) -> Vec<GaussPoint> {
    let rule_1d = gauss_1d(n);
    let mut points = Vec::with_capacity(n * n);

    for &(eta, w_eta) in &rule_1d {
        for &(xi, w_xi) in &rule_1d {
            points.push(GaussPoint::new([xi, eta, 0.0], w_xi * w_eta));
        }
    }

    points
}

/// Tetrahedral quadrature on the unit tetrahedron with vertices (0,0,0),
/// (1,0,0), (0,1,0), (0,0,1).
///
/// Points are given as (ξ, η, ζ); weights sum to the reference volume 1/6.
///
/// # Panics
///
/// Panics if `n` is not 1 or 4.
pub fn gauss_tet(n: usize) -> Vec<GaussPoint> {
    match n {
        1 => {
            // Centroid rule, degree 1.
            vec![GaussPoint::new([0.25, 0.25, 0.25], 1.0 / 6.0)]
        }
        4 => {
            // Degree-2 rule: points at (α, β, β) and permutations.
            let sqrt5 = 5.0_f64.sqrt();
            let alpha = (5.0 + 3.0 * sqrt5) / 20.0;
            let beta = (5.0 - sqrt5) / 20.0;
            let w = 1.0 / 24.0;
            vec![
                GaussPoint::new([alpha, beta, beta], w),
                GaussPoint::new([beta, alpha, beta], w),
                GaussPoint::new([beta, beta, alpha], w),
                GaussPoint::new([beta, beta, beta], w),
            ]
        }
        _ => panic!("gauss_tet: n must be 1 or 4, got {}", n),
    }
}

/// Hexahedral quadrature on ξ, η, ζ ∈ [-1, 1], tensor product of [`gauss_1d`].
///
/// `n` is the number of points per direction; returns n³ points whose
/// weights sum to the reference volume 8.
pub fn gauss_hex(n: usize) -> Vec<GaussPoint> {
    let rule_1d = gauss_1d(n);
    let mut points = Vec::with_capacity(n * n * n);

    for &(zeta, w_zeta) in &rule_1d {
        for &(eta, w_eta) in &rule_1d {
            for &(xi, w_xi) in &rule_1d {
                points.push(GaussPoint::new([xi, eta, zeta], w_xi * w_eta * w_zeta));
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gauss_1d_weights_sum_to_interval_length() {
        for n in 1..=3 {
            let sum: f64 = gauss_1d(n).iter().map(|&(_, w)| w).sum();
            assert_relative_eq!(sum, 2.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_gauss_1d_integrates_cubic_exactly() {
        // ∫_{-1}^{1} x³ + x² dx = 2/3; the 2-point rule is degree 3.
        let integral: f64 = gauss_1d(2)
            .iter()
            .map(|&(x, w)| w * (x.powi(3) + x.powi(2)))
            .sum();
        assert_relative_eq!(integral, 2.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_gauss_tri_weights_sum_to_reference_area() {
        for n in [1, 3] {
            let sum: f64 = gauss_tri(n).iter().map(|gp| gp.weight()).sum();
            assert_relative_eq!(sum, 0.5, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_gauss_tet_weights_sum_to_reference_volume() {
        for n in [1, 4] {
            let sum: f64 = gauss_tet(n).iter().map(|gp| gp.weight()).sum();
            assert_relative_eq!(sum, 1.0 / 6.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_gauss_quad_weights_sum_to_reference_area() {
        for n in 1..=3 {
            let pts = gauss_quad(n);
            assert_eq!(pts.len(), n * n);
            let sum: f64 = pts.iter().map(|gp| gp.weight()).sum();
            assert_relative_eq!(sum, 4.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_gauss_hex_weights_sum_to_reference_volume() {
        for n in 1..=3 {
            let pts = gauss_hex(n);
            assert_eq!(pts.len(), n * n * n);
            let sum: f64 = pts.iter().map(|gp| gp.weight()).sum();
            assert_relative_eq!(sum, 8.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_gauss_tet_4_points_inside_reference_tet() {
        for gp in gauss_tet(4) {
            let [xi, eta, zeta] = gp.coords();
            assert!(xi > 0.0 && eta > 0.0 && zeta > 0.0);
            assert!(xi + eta + zeta < 1.0);
        }
    }

    #[test]
    fn test_gauss_point_cache_allocation() {
        let mut gp = GaussPoint::new([0.25, 0.25, 0.25], 1.0 / 6.0);
        gp.allocate(4, 3);
        assert_eq!(gp.shape.len(), 4);
        assert_eq!(gp.grad_ref.shape(), (4, 3));
        assert_eq!(gp.grad_cur.shape(), (4, 3));
        assert_relative_eq!(gp.weight(), 1.0 / 6.0);
    }
}
