//! Element kinematics: coordinates, shape-function gradients, and stiffness
//! accumulation.
//!
//! An [`Element`] owns the reference and current nodal coordinates of one
//! mesh cell, the Gauss points of its type's fixed quadrature rule, and the
//! accumulated stiffness blocks `Kab`. The solver sets reference coordinates
//! once, updates current coordinates every nonlinear iteration, runs one of
//! the gradient passes, then reads per-Gauss-point gradients and Jacobian
//! determinants to build and accumulate `Kab`.
//!
//! Element types are a closed set, dispatched on [`ElementKind`]; each kind's
//! shape-function and derivative tables live in its own submodule.
//!
//! # Submodules
//!
//! - [`gauss`] - Gauss points and quadrature rules
//! - [`tri3`], [`quad4`], [`tet4`], [`hex8`] - per-type shape tables

use std::io::Write;

use log::{debug, warn};
use nalgebra::{DMatrix, Matrix2, Matrix3};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::Frame;

pub mod gauss;
pub mod hex8;
pub mod quad4;
pub mod tet4;
pub mod tri3;

pub use gauss::GaussPoint;

/// Jacobian determinants below this are treated as degenerate geometry.
/// Non-positive determinants (inverted elements) are always degenerate.
const DET_TOL: f64 = 1e-12;

/// The closed set of supported element shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 3-node triangle, 1 Gauss point (2D).
    Tri3,
    /// 4-node quadrilateral, 2×2 Gauss points (2D).
    Quad4,
    /// 4-node tetrahedron, 1 Gauss point (3D).
    Tet4,
    /// 8-node hexahedron, 2×2×2 Gauss points (3D).
    Hex8,
}

impl ElementKind {
    /// Number of nodes for this element type.
    pub fn n_nodes(self) -> usize {
        match self {
            ElementKind::Tri3 => tri3::N_NODES,
            ElementKind::Quad4 => quad4::N_NODES,
            ElementKind::Tet4 => tet4::N_NODES,
            ElementKind::Hex8 => hex8::N_NODES,
        }
    }

    /// Number of Gauss points for this element type.
    pub fn n_gauss_points(self) -> usize {
        match self {
            ElementKind::Tri3 => tri3::N_GAUSS,
            ElementKind::Quad4 => quad4::N_GAUSS,
            ElementKind::Tet4 => tet4::N_GAUSS,
            ElementKind::Hex8 => hex8::N_GAUSS,
        }
    }

    /// Spatial dimension (2 or 3).
    pub fn dimension(self) -> usize {
        match self {
            ElementKind::Tri3 | ElementKind::Quad4 => 2,
            ElementKind::Tet4 | ElementKind::Hex8 => 3,
        }
    }

    /// The fixed quadrature rule for this element type.
    fn gauss_rule(self) -> Vec<GaussPoint> {
        match self {
            ElementKind::Tri3 => tri3::gauss_rule(),
            ElementKind::Quad4 => quad4::gauss_rule(),
            ElementKind::Tet4 => tet4::gauss_rule(),
            ElementKind::Hex8 => hex8::gauss_rule(),
        }
    }

    /// Shape-function values at a parametric point.
    fn shape_functions(self, p: [f64; 3]) -> Vec<f64> {
        match self {
            ElementKind::Tri3 => tri3::shape_functions(p[0], p[1]).to_vec(),
            ElementKind::Quad4 => quad4::shape_functions(p[0], p[1]).to_vec(),
            ElementKind::Tet4 => tet4::shape_functions(p[0], p[1], p[2]).to_vec(),
            ElementKind::Hex8 => hex8::shape_functions(p[0], p[1], p[2]).to_vec(),
        }
    }

    /// Parametric derivatives dN_a/dξ_i at a parametric point, (node × dim).
    fn shape_derivatives(self, p: [f64; 3]) -> DMatrix<f64> {
        match self {
            ElementKind::Tri3 => table_to_matrix(&tri3::shape_derivatives()),
            ElementKind::Quad4 => table_to_matrix(&quad4::shape_derivatives(p[0], p[1])),
            ElementKind::Tet4 => table_to_matrix(&tet4::shape_derivatives()),
            ElementKind::Hex8 => table_to_matrix(&hex8::shape_derivatives(p[0], p[1], p[2])),
        }
    }
}

/// Copy a fixed per-type derivative table into a (node × dim) matrix.
fn table_to_matrix<const N: usize, const D: usize>(table: &[[f64; D]; N]) -> DMatrix<f64> {
    DMatrix::from_fn(N, D, |a, i| table[a][i])
}

/// One finite element: nodal coordinates in both configurations, Gauss-point
/// kinematic caches, and the accumulated stiffness blocks.
///
/// All storage is owned and self-contained; distinct elements share no
/// mutable state, so an outer assembly loop may process them in parallel
/// under its own synchronization discipline.
#[derive(Debug, Clone)]
pub struct Element {
    kind: ElementKind,
    n_dim: usize,
    n_nodes: usize,
    /// Reference (undeformed) nodal coordinates, (node × dim).
    ref_coords: DMatrix<f64>,
    /// Current (possibly deformed) nodal coordinates, (node × dim).
    cur_coords: DMatrix<f64>,
    gauss: Vec<GaussPoint>,
    /// Stiffness blocks Kab, row-major by (nodeA, nodeB), each (dim × dim).
    kab: Vec<DMatrix<f64>>,
    ref_valid: bool,
    cur_valid: bool,
}

impl Element {
    /// Create an element of the given kind.
    ///
    /// The Gauss points are created here with their fixed locations and
    /// weights, and the shape-function values are evaluated once; gradients
    /// and Jacobians stay invalid until a compute pass runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the kind's dimension does not match the
    /// problem configuration.
    pub fn new(kind: ElementKind, config: &Config) -> Result<Self> {
        let n_dim = config.n_dim();
        if kind.dimension() != n_dim {
            return Err(Error::Config(format!(
                "{:?} is a {}D element but the problem is {}D",
                kind,
                kind.dimension(),
                n_dim
            )));
        }

        let n_nodes = kind.n_nodes();
        let mut gauss = kind.gauss_rule();
        for gp in &mut gauss {
            gp.allocate(n_nodes, n_dim);
            let shape = kind.shape_functions(gp.coords());
            gp.shape.copy_from_slice(&shape);
        }

        Ok(Self {
            kind,
            n_dim,
            n_nodes,
            ref_coords: DMatrix::zeros(n_nodes, n_dim),
            cur_coords: DMatrix::zeros(n_nodes, n_dim),
            gauss,
            kab: vec![DMatrix::zeros(n_dim, n_dim); n_nodes * n_nodes],
            ref_valid: false,
            cur_valid: false,
        })
    }

    /// Element shape.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n_nodes
    }

    /// Number of Gauss points.
    pub fn gauss_point_count(&self) -> usize {
        self.gauss.len()
    }

    /// Spatial dimension.
    pub fn n_dim(&self) -> usize {
        self.n_dim
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.n_nodes {
            return Err(Error::Index {
                what: "node",
                index: node,
                limit: self.n_nodes,
            });
        }
        Ok(())
    }

    fn check_dim(&self, dim: usize) -> Result<()> {
        if dim >= self.n_dim {
            return Err(Error::Index {
                what: "dimension",
                index: dim,
                limit: self.n_dim,
            });
        }
        Ok(())
    }

    fn check_gauss(&self, gauss: usize) -> Result<()> {
        if gauss >= self.gauss.len() {
            return Err(Error::Index {
                what: "Gauss point",
                index: gauss,
                limit: self.gauss.len(),
            });
        }
        Ok(())
    }

    fn check_frame(&self, frame: Frame) -> Result<()> {
        let valid = match frame {
            Frame::Reference => self.ref_valid,
            Frame::Current => self.cur_valid,
        };
        if !valid {
            return Err(Error::Uninitialized { frame });
        }
        Ok(())
    }

    /// Set one reference coordinate. Invalidates reference-frame gradients.
    pub fn set_reference_coord(&mut self, node: usize, dim: usize, value: f64) -> Result<()> {
        self.check_node(node)?;
        self.check_dim(dim)?;
        self.ref_coords[(node, dim)] = value;
        self.ref_valid = false;
        Ok(())
    }

    /// Set one current coordinate. Invalidates current-frame gradients.
    pub fn set_current_coord(&mut self, node: usize, dim: usize, value: f64) -> Result<()> {
        self.check_node(node)?;
        self.check_dim(dim)?;
        self.cur_coords[(node, dim)] = value;
        self.cur_valid = false;
        Ok(())
    }

    /// Read back one reference coordinate.
    pub fn reference_coord(&self, node: usize, dim: usize) -> Result<f64> {
        self.check_node(node)?;
        self.check_dim(dim)?;
        Ok(self.ref_coords[(node, dim)])
    }

    /// Read back one current coordinate.
    pub fn current_coord(&self, node: usize, dim: usize) -> Result<f64> {
        self.check_node(node)?;
        self.check_dim(dim)?;
        Ok(self.cur_coords[(node, dim)])
    }

    /// Integration weight of a Gauss point.
    pub fn weight(&self, gauss: usize) -> Result<f64> {
        self.check_gauss(gauss)?;
        Ok(self.gauss[gauss].weight())
    }

    /// Reference-configuration Jacobian determinant at a Gauss point.
    ///
    /// # Errors
    ///
    /// [`Error::Uninitialized`] before [`compute_gradients_reference`]
    /// (or after a reference-coordinate write).
    ///
    /// [`compute_gradients_reference`]: Element::compute_gradients_reference
    pub fn jacobian_det(&self, gauss: usize) -> Result<f64> {
        self.check_gauss(gauss)?;
        self.check_frame(Frame::Reference)?;
        Ok(self.gauss[gauss].det_jac_ref)
    }

    /// Current-configuration Jacobian determinant at a Gauss point.
    pub fn jacobian_det_current(&self, gauss: usize) -> Result<f64> {
        self.check_gauss(gauss)?;
        self.check_frame(Frame::Current)?;
        Ok(self.gauss[gauss].det_jac_cur)
    }

    /// Borrow a Gauss point, caches included.
    pub fn gauss_point(&self, gauss: usize) -> Result<&GaussPoint> {
        self.check_gauss(gauss)?;
        Ok(&self.gauss[gauss])
    }

    /// Shape-function gradient component dN_node/dX_dim at a Gauss point in
    /// the requested configuration.
    pub fn gradient(&self, frame: Frame, node: usize, gauss: usize, dim: usize) -> Result<f64> {
        self.check_node(node)?;
        self.check_gauss(gauss)?;
        self.check_dim(dim)?;
        self.check_frame(frame)?;
        Ok(self.gauss[gauss].gradient(frame, node, dim))
    }

    /// Reference-configuration gradient component (see [`Element::gradient`]).
    pub fn gradient_reference(&self, node: usize, gauss: usize, dim: usize) -> Result<f64> {
        self.gradient(Frame::Reference, node, gauss, dim)
    }

    /// Current-configuration gradient component (see [`Element::gradient`]).
    pub fn gradient_current(&self, node: usize, gauss: usize, dim: usize) -> Result<f64> {
        self.gradient(Frame::Current, node, gauss, dim)
    }

    fn check_block(&self, block: &DMatrix<f64>) -> Result<()> {
        if block.nrows() != self.n_dim {
            return Err(Error::Index {
                what: "stiffness block row",
                index: block.nrows(),
                limit: self.n_dim,
            });
        }
        if block.ncols() != self.n_dim {
            return Err(Error::Index {
                what: "stiffness block column",
                index: block.ncols(),
                limit: self.n_dim,
            });
        }
        Ok(())
    }

    /// Accumulate `block` into Kab for the node pair (a, b) element-wise.
    pub fn add_stiffness_block(
        &mut self,
        node_a: usize,
        node_b: usize,
        block: &DMatrix<f64>,
    ) -> Result<()> {
        self.check_node(node_a)?;
        self.check_node(node_b)?;
        self.check_block(block)?;
        self.kab[node_a * self.n_nodes + node_b] += block;
        Ok(())
    }

    /// Accumulate the transpose of `block` into Kab for the node pair (a, b).
    ///
    /// Used when only the upper-triangular node-pair contributions are
    /// computed explicitly and symmetry supplies the mirrored block. Calling
    /// this on a diagonal pair (a == b) is permitted; for the symmetric
    /// diagonal blocks of such formulations it is equivalent to
    /// [`Element::add_stiffness_block`].
    pub fn add_stiffness_block_transposed(
        &mut self,
        node_a: usize,
        node_b: usize,
        block: &DMatrix<f64>,
    ) -> Result<()> {
        self.check_node(node_a)?;
        self.check_node(node_b)?;
        self.check_block(block)?;
        self.kab[node_a * self.n_nodes + node_b] += block.transpose();
        Ok(())
    }

    /// The accumulated stiffness block for the node pair (a, b).
    pub fn stiffness_block(&self, node_a: usize, node_b: usize) -> Result<&DMatrix<f64>> {
        self.check_node(node_a)?;
        self.check_node(node_b)?;
        Ok(&self.kab[node_a * self.n_nodes + node_b])
    }

    /// Zero every Kab entry. Called once per assembly pass before
    /// re-accumulation; gradient caches are untouched.
    pub fn clear(&mut self) {
        for block in &mut self.kab {
            block.fill(0.0);
        }
    }

    /// Compute shape-function gradients and Jacobian determinants with
    /// respect to the reference configuration, at every Gauss point.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateGeometry`] if any Gauss point's Jacobian
    /// determinant is non-positive or below tolerance; the reference caches
    /// stay invalid in that case.
    pub fn compute_gradients_reference(&mut self) -> Result<()> {
        self.compute_gradients(Frame::Reference)
    }

    /// Compute shape-function gradients and Jacobian determinants with
    /// respect to the current configuration, at every Gauss point. Used by
    /// geometrically nonlinear formulations.
    pub fn compute_gradients_current(&mut self) -> Result<()> {
        self.compute_gradients(Frame::Current)
    }

    /// Shared gradient kernel: per Gauss point, assemble the Jacobian from
    /// the type's parametric-derivative table and the selected coordinates,
    /// invert it in closed form, and map parametric to physical gradients.
    fn compute_gradients(&mut self, frame: Frame) -> Result<()> {
        let n_dim = self.n_dim;
        let n_nodes = self.n_nodes;
        let kind = self.kind;

        match frame {
            Frame::Reference => self.ref_valid = false,
            Frame::Current => self.cur_valid = false,
        }
        let coords = match frame {
            Frame::Reference => &self.ref_coords,
            Frame::Current => &self.cur_coords,
        };

        for (ig, gp) in self.gauss.iter_mut().enumerate() {
            let dn_dxi = kind.shape_derivatives(gp.coords());

            // J_ij = Σ_a dN_a/dξ_i · x_aj
            let mut jac = DMatrix::zeros(n_dim, n_dim);
            for a in 0..n_nodes {
                for i in 0..n_dim {
                    for j in 0..n_dim {
                        jac[(i, j)] += dn_dxi[(a, i)] * coords[(a, j)];
                    }
                }
            }

            let (jac_inv, det) = invert_jacobian(&jac, ig)?;

            // dN_a/dx_i = Σ_j (J⁻¹)_ij · dN_a/dξ_j
            let grad = match frame {
                Frame::Reference => &mut gp.grad_ref,
                Frame::Current => &mut gp.grad_cur,
            };
            for a in 0..n_nodes {
                for i in 0..n_dim {
                    let mut g = 0.0;
                    for j in 0..n_dim {
                        g += jac_inv[(i, j)] * dn_dxi[(a, j)];
                    }
                    grad[(a, i)] = g;
                }
            }

            match frame {
                Frame::Reference => gp.det_jac_ref = det,
                Frame::Current => gp.det_jac_cur = det,
            }
        }

        match frame {
            Frame::Reference => self.ref_valid = true,
            Frame::Current => self.cur_valid = true,
        }
        Ok(())
    }

    /// Dump reference-configuration gradients per node and Gauss point to a
    /// diagnostic sink. The format is for inspection only and not part of
    /// any numerical contract.
    pub fn write_gradients<W: Write>(&self, out: &mut W) -> Result<()> {
        self.check_frame(Frame::Reference)?;
        debug!(
            "dumping gradients: {:?}, {} nodes, {} Gauss points",
            self.kind,
            self.n_nodes,
            self.gauss.len()
        );
        for (ig, gp) in self.gauss.iter().enumerate() {
            writeln!(
                out,
                "gauss {} (weight {:.6}, det J_X {:.6e})",
                ig, gp.weight(), gp.det_jac_ref
            )?;
            for a in 0..self.n_nodes {
                write!(out, "  node {}:", a)?;
                for i in 0..self.n_dim {
                    write!(out, " {:+.9e}", gp.grad_ref[(a, i)])?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Closed-form 2×2 / 3×3 Jacobian inversion with degeneracy detection.
fn invert_jacobian(jac: &DMatrix<f64>, gauss: usize) -> Result<(DMatrix<f64>, f64)> {
    let degenerate = |det: f64| {
        warn!(
            "degenerate geometry at Gauss point {}: det J = {:.6e}",
            gauss, det
        );
        Error::DegenerateGeometry { gauss, det }
    };

    match jac.nrows() {
        2 => {
            let j = Matrix2::new(jac[(0, 0)], jac[(0, 1)], jac[(1, 0)], jac[(1, 1)]);
            let det = j.determinant();
            if det < DET_TOL {
                return Err(degenerate(det));
            }
            let inv = j.try_inverse().ok_or_else(|| degenerate(det))?;
            Ok((DMatrix::from_fn(2, 2, |i, k| inv[(i, k)]), det))
        }
        3 => {
            #[rustfmt::skip]
            let j = Matrix3::new(
                jac[(0, 0)], jac[(0, 1)], jac[(0, 2)],
                jac[(1, 0)], jac[(1, 1)], jac[(1, 2)],
                jac[(2, 0)], jac[(2, 1)], jac[(2, 2)],
            );
            let det = j.determinant();
            if det < DET_TOL {
                return Err(degenerate(det));
            }
            let inv = j.try_inverse().ok_or_else(|| degenerate(det))?;
            Ok((DMatrix::from_fn(3, 3, |i, k| inv[(i, k)]), det))
        }
        n => unreachable!("Jacobian dimension {} (construction validates 2 or 3)", n),
    }
}
