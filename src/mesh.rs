//! Mesh geometry: nodal coordinates and element connectivity.
//!
//! The mesh is the geometry collaborator borrowed read-only at element
//! construction time. [`Mesh::element`] builds one [`Element`] per cell with
//! its reference coordinates loaded from the mesh and its current
//! coordinates initialized to the reference configuration; elements never
//! mutate the mesh.

use crate::config::Config;
use crate::element::{Element, ElementKind};
use crate::error::{Error, Result};
use crate::types::Point3;

/// Element connectivity: node indices for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    /// Element shape.
    pub kind: ElementKind,
    /// Node indices (0-based).
    pub nodes: Vec<usize>,
}

/// Finite element mesh: nodes plus validated connectivity.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    nodes: Vec<Point3>,
    cells: Vec<Connectivity>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(n_nodes: usize, n_cells: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n_nodes),
            cells: Vec::with_capacity(n_cells),
        }
    }

    /// Add a node, returning its index. 2D meshes use z = 0.
    pub fn add_node(&mut self, point: Point3) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(point);
        idx
    }

    /// Add a cell, validating node count and indices.
    pub fn add_cell(&mut self, kind: ElementKind, nodes: Vec<usize>) -> Result<usize> {
        if nodes.len() != kind.n_nodes() {
            return Err(Error::Mesh(format!(
                "{:?} requires {} nodes, got {}",
                kind,
                kind.n_nodes(),
                nodes.len()
            )));
        }
        for &node in &nodes {
            if node >= self.nodes.len() {
                return Err(Error::Mesh(format!(
                    "node index {} out of bounds (mesh has {} nodes)",
                    node,
                    self.nodes.len()
                )));
            }
        }
        let idx = self.cells.len();
        self.cells.push(Connectivity { kind, nodes });
        Ok(idx)
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of cells.
    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    /// Nodal coordinates.
    pub fn node(&self, idx: usize) -> Option<&Point3> {
        self.nodes.get(idx)
    }

    /// Cell connectivity.
    pub fn cell(&self, idx: usize) -> Option<&Connectivity> {
        self.cells.get(idx)
    }

    /// Build the element for one cell: reference coordinates from the mesh,
    /// current coordinates initialized equal to reference.
    pub fn element(&self, cell: usize, config: &Config) -> Result<Element> {
        let conn = self
            .cells
            .get(cell)
            .ok_or_else(|| Error::Mesh(format!("cell index {} out of bounds", cell)))?;

        let mut element = Element::new(conn.kind, config)?;
        for (local, &global) in conn.nodes.iter().enumerate() {
            let point = &self.nodes[global];
            for dim in 0..config.n_dim() {
                element.set_reference_coord(local, dim, point[dim])?;
                element.set_current_coord(local, dim, point[dim])?;
            }
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_triangle_mesh() -> Mesh {
        // Unit square split along the diagonal.
        let mut mesh = Mesh::new();
        let n0 = mesh.add_node(Point3::new(0.0, 0.0, 0.0));
        let n1 = mesh.add_node(Point3::new(1.0, 0.0, 0.0));
        let n2 = mesh.add_node(Point3::new(1.0, 1.0, 0.0));
        let n3 = mesh.add_node(Point3::new(0.0, 1.0, 0.0));
        mesh.add_cell(ElementKind::Tri3, vec![n0, n1, n2]).unwrap();
        mesh.add_cell(ElementKind::Tri3, vec![n0, n2, n3]).unwrap();
        mesh
    }

    #[test]
    fn test_add_cell_validates_node_count() {
        let mut mesh = Mesh::new();
        mesh.add_node(Point3::new(0.0, 0.0, 0.0));
        mesh.add_node(Point3::new(1.0, 0.0, 0.0));
        assert!(mesh.add_cell(ElementKind::Tri3, vec![0, 1]).is_err());
    }

    #[test]
    fn test_add_cell_validates_node_indices() {
        let mut mesh = Mesh::new();
        mesh.add_node(Point3::new(0.0, 0.0, 0.0));
        mesh.add_node(Point3::new(1.0, 0.0, 0.0));
        assert!(mesh.add_cell(ElementKind::Tri3, vec![0, 1, 7]).is_err());
    }

    #[test]
    fn test_element_construction_loads_reference_coords() {
        let mesh = two_triangle_mesh();
        let config = Config::new(2).unwrap();
        let element = mesh.element(1, &config).unwrap();

        assert_eq!(element.kind(), ElementKind::Tri3);
        assert_relative_eq!(element.reference_coord(1, 0).unwrap(), 1.0);
        assert_relative_eq!(element.reference_coord(2, 1).unwrap(), 1.0);
        // Current configuration starts at the reference configuration.
        assert_relative_eq!(element.current_coord(1, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_mesh_elements_tile_the_square() {
        let mesh = two_triangle_mesh();
        let config = Config::new(2).unwrap();

        let mut area = 0.0;
        for cell in 0..mesh.n_cells() {
            let mut element = mesh.element(cell, &config).unwrap();
            element.compute_gradients_reference().unwrap();
            for ig in 0..element.gauss_point_count() {
                area += element.weight(ig).unwrap() * element.jacobian_det(ig).unwrap();
            }
        }
        assert_relative_eq!(area, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_element_for_missing_cell() {
        let mesh = two_triangle_mesh();
        let config = Config::new(2).unwrap();
        assert!(mesh.element(5, &config).is_err());
    }
}
