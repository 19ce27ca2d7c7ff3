//! Problem configuration.
//!
//! The spatial dimension is fixed for the whole problem and shared by every
//! element instance. It is threaded explicitly into each element constructor
//! rather than held as ambient global state.

use crate::error::{Error, Result};

/// Problem-wide configuration consumed read-only at element construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    n_dim: usize,
}

impl Config {
    /// Create a configuration for a 2D or 3D problem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for any dimension other than 2 or 3.
    pub fn new(n_dim: usize) -> Result<Self> {
        if n_dim != 2 && n_dim != 3 {
            return Err(Error::Config(format!(
                "spatial dimension must be 2 or 3, got {}",
                n_dim
            )));
        }
        Ok(Self { n_dim })
    }

    /// Spatial dimension of the problem (2 or 3).
    pub fn n_dim(&self) -> usize {
        self.n_dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_2d_and_3d() {
        assert_eq!(Config::new(2).unwrap().n_dim(), 2);
        assert_eq!(Config::new(3).unwrap().n_dim(), 3);
    }

    #[test]
    fn test_config_rejects_other_dimensions() {
        assert!(Config::new(0).is_err());
        assert!(Config::new(1).is_err());
        assert!(Config::new(4).is_err());
    }
}
