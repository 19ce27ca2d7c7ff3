//! Core data types shared across the crate.

use std::fmt;

use nalgebra::Vector3;

/// A point in 3D space. 2D element nodes are stored with z = 0.
pub type Point3 = Vector3<f64>;

/// The configuration a kinematic quantity refers to.
///
/// Reference is the undeformed mesh; current is the (possibly deformed)
/// geometry updated every nonlinear iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Undeformed configuration, set once at construction.
    Reference,
    /// Deformed configuration, updated each solver iteration.
    Current,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Reference => write!(f, "reference"),
            Frame::Current => write!(f, "current"),
        }
    }
}
