//! Per-element isoparametric kinematics for finite element solvers.
//!
//! This crate computes, for the standard low-order element shapes, the
//! geometric quantities a structural or fluid solver needs element by
//! element:
//!
//! - shape-function gradients with respect to the reference and the current
//!   (deformed) configuration
//! - the Jacobian determinant at each Gauss point
//! - accumulation of per-node-pair stiffness submatrices `Kab`
//!
//! # Architecture
//!
//! - [`ElementKind`]: the closed set of element shapes (Tri3, Quad4, Tet4,
//!   Hex8), each with fixed shape-function tables and quadrature rule
//! - [`Element`]: owns one cell's coordinates, Gauss points, and `Kab`
//! - [`GaussPoint`]: one integration point with its per-point caches
//! - [`Mesh`]: node coordinates and connectivity; builds elements per cell
//! - [`Config`]: problem dimensionality, threaded into every constructor
//!
//! # Usage
//!
//! The driving solver creates one element per mesh cell, sets reference
//! coordinates once, updates current coordinates every nonlinear iteration,
//! runs a gradient pass, and reads weights, determinants, and gradients to
//! accumulate `Kab`:
//!
//! ```
//! use isopar::{Config, Element, ElementKind};
//!
//! let config = Config::new(2)?;
//! let mut element = Element::new(ElementKind::Tri3, &config)?;
//! for (node, (x, y)) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)].into_iter().enumerate() {
//!     element.set_reference_coord(node, 0, x)?;
//!     element.set_reference_coord(node, 1, y)?;
//! }
//! element.compute_gradients_reference()?;
//! let area: f64 = (0..element.gauss_point_count())
//!     .map(|ig| element.weight(ig).unwrap() * element.jacobian_det(ig).unwrap())
//!     .sum();
//! assert!((area - 0.5).abs() < 1e-14);
//! # Ok::<(), isopar::Error>(())
//! ```
//!
//! Elements are self-contained and single-threaded; an outer assembly loop
//! may process distinct elements in parallel and accumulate each element's
//! `Kab` into the global system under its own synchronization discipline.

pub mod config;
pub mod element;
pub mod error;
pub mod mesh;
pub mod types;

pub use config::Config;
pub use element::{Element, ElementKind, GaussPoint};
pub use error::{Error, Result};
pub use mesh::{Connectivity, Mesh};
pub use types::{Frame, Point3};
