//! Error types for element kinematics operations.

use crate::types::Frame;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying elements.
#[derive(Error, Debug)]
pub enum Error {
    /// A node, dimension, or Gauss-point index outside the element's fixed
    /// range. Always a caller bug.
    #[error("{what} index {index} out of range (limit {limit})")]
    Index {
        /// What kind of index was out of range ("node", "dimension", ...).
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Exclusive upper bound for this index.
        limit: usize,
    },

    /// Jacobian determinant non-positive or below tolerance at a Gauss
    /// point. Signals an inverted or collapsed element; the caller (e.g. a
    /// nonlinear solver) decides whether to cut the step and retry.
    #[error("degenerate element geometry: Jacobian determinant {det:.6e} at Gauss point {gauss}")]
    DegenerateGeometry {
        /// Gauss point at which degeneracy was detected.
        gauss: usize,
        /// The offending determinant.
        det: f64,
    },

    /// A gradient or Jacobian was queried before the matching compute pass
    /// ran, or after a coordinate write invalidated it.
    #[error("{frame} gradients have not been computed")]
    Uninitialized {
        /// Which configuration's caches were missing.
        frame: Frame,
    },

    /// Invalid problem configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Mesh construction errors.
    #[error("mesh error: {0}")]
    Mesh(String),

    /// I/O errors from the diagnostic sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
