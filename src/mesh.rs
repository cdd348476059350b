//! One AMF mesh: raw vertex coordinates and triangle indices.

use crate::float_types::Real;
use crate::io::IoError;
use crate::triplet::Triplet;
use nalgebra::Point3;

/// Vertex and triangle lists of one `<mesh>` element, in document order.
///
/// Values stay raw text; use [`AmfMesh::positions`] and [`AmfMesh::faces`]
/// for numeric views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmfMesh {
    /// `(x, y, z)` per vertex
    pub vertices: Vec<Triplet>,
    /// `(v1, v2, v3)` per triangle
    pub triangles: Vec<Triplet>,
}

impl AmfMesh {
    pub const fn new(vertices: Vec<Triplet>, triangles: Vec<Triplet>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns a copy with every triangle's first and third index swapped,
    /// which flips the facing of each triangle.
    ///
    /// Applying it twice restores the original order.
    pub fn inverse(&self) -> Self {
        let mut inverted = self.clone();
        inverted.invert_winding();
        inverted
    }

    /// In-place version of [`AmfMesh::inverse`].
    pub fn invert_winding(&mut self) {
        for triangle in &mut self.triangles {
            triangle.swap(0, 2);
        }
    }

    /// Vertex coordinates parsed as numbers.
    pub fn positions(&self) -> Result<Vec<Point3<Real>>, IoError> {
        self.vertices
            .iter()
            .map(|[x, y, z]| -> Result<Point3<Real>, IoError> {
                Ok(Point3::new(
                    x.trim().parse::<Real>()?,
                    y.trim().parse::<Real>()?,
                    z.trim().parse::<Real>()?,
                ))
            })
            .collect()
    }

    /// Triangle vertex indices parsed as numbers.
    ///
    /// Indices are not checked against the vertex count.
    pub fn faces(&self) -> Result<Vec<[usize; 3]>, IoError> {
        self.triangles
            .iter()
            .map(|[a, b, c]| -> Result<[usize; 3], IoError> {
                Ok([
                    a.trim().parse::<usize>()?,
                    b.trim().parse::<usize>()?,
                    c.trim().parse::<usize>()?,
                ])
            })
            .collect()
    }
}
