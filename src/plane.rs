//! Splitting planes and the polygon clipper.

use crate::face::Face;
use crate::float_types::Real;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// A plane through `point` with unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub point: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Plane {
    /// Create a plane; `normal` is normalized.
    pub fn new(point: Point3<Real>, normal: Vector3<Real>) -> Self {
        Plane {
            point,
            normal: normal.normalize(),
        }
    }

    /// The plane through `point` perpendicular to `axis` (0 = x, 1 = y, 2 = z).
    pub fn axis(axis: usize, point: Point3<Real>) -> Self {
        let mut normal = Vector3::zeros();
        normal[axis] = 1.0;
        Plane { point, normal }
    }

    #[inline]
    pub fn signed_distance(&self, p: &Point3<Real>) -> Real {
        (p - self.point).dot(&self.normal)
    }

    /// True for points strictly on the negative side.
    #[inline]
    pub fn is_behind(&self, p: &Point3<Real>) -> bool {
        self.signed_distance(p) < 0.0
    }

    /// Splits a face into `(back, front)` parts.
    ///
    /// Vertices with negative signed distance go to `back`, all others
    /// (including vertices exactly on the plane) to `front`. Every edge that
    /// changes side contributes one interpolated vertex to **both** parts, so
    /// the two halves share the cut exactly. A part with fewer than three
    /// vertices is `None`; in particular a face wholly on one side yields
    /// `None` for the other.
    pub fn split_face(&self, face: &Face) -> (Option<Face>, Option<Face>) {
        let verts = &face.vertices;
        let mut back = Vec::with_capacity(verts.len() + 1);
        let mut front = Vec::with_capacity(verts.len() + 1);

        for i in 0..verts.len() {
            let v0 = &verts[i];
            let v1 = &verts[(i + 1) % verts.len()];

            let b0 = self.is_behind(&v0.pos);
            let b1 = self.is_behind(&v1.pos);

            if b0 {
                back.push(*v0);
            } else {
                front.push(*v0);
            }

            if b0 != b1 {
                let cut = self.edge_crossing(v0, v1);
                back.push(cut);
                front.push(cut);
            }
        }

        (
            Face::from_clipped(face.material, back),
            Face::from_clipped(face.material, front),
        )
    }

    /// Vertex where the edge `v0 → v1` crosses the plane. The endpoints must
    /// lie on opposite sides, so the denominator is non-zero.
    fn edge_crossing(&self, v0: &Vertex, v1: &Vertex) -> Vertex {
        let t = (self.point - v0.pos).dot(&self.normal) / (v1.pos - v0.pos).dot(&self.normal);
        v0.interpolate(v1, t)
    }
}
