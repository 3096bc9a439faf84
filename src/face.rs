//! Struct and functions for working with planar, convex `Face`s of level geometry.

use crate::bounding_box::BoundingBox;
use crate::errors::ValidationError;
use crate::material::MaterialId;
use crate::triangle::Triangle;
use crate::vertex::Vertex;

/// A convex, planar polygon with a material. Loop order defines winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub material: MaterialId,
    pub vertices: Vec<Vertex>,
}

impl Face {
    /// Create a face, checking that it has at least three vertices and that
    /// every position is finite.
    pub fn new(material: MaterialId, vertices: Vec<Vertex>) -> Result<Self, ValidationError> {
        if vertices.len() < 3 {
            return Err(ValidationError::TooFewPoints(vertices.len()));
        }
        if let Some(bad) = vertices.iter().find(|v| !v.pos.iter().all(|c| c.is_finite())) {
            return Err(ValidationError::InvalidCoordinate(bad.pos));
        }
        Ok(Face { material, vertices })
    }

    /// Wraps clipper output. Anything shorter than a triangle is dropped.
    pub(crate) fn from_clipped(material: MaterialId, vertices: Vec<Vertex>) -> Option<Self> {
        (vertices.len() >= 3).then_some(Face { material, vertices })
    }

    /// Fan triangulation indices `[0, i, i + 1]` for `i` in `1..len - 1`.
    pub fn fan_indices(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (1..self.vertices.len().saturating_sub(1)).map(|i| [0, i, i + 1])
    }

    /// Position-only fan triangles of this face.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.fan_indices().map(|[a, b, c]| {
            Triangle::new(
                self.vertices[a].pos,
                self.vertices[b].pos,
                self.vertices[c].pos,
            )
        })
    }

    /// Smallest box containing every vertex.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().map(|v| v.pos))
    }
}
