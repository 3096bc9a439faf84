//! Struct and functions for working with `Vertex`s from which `Face`s are composed.

use crate::float_types::{Real, RealBits, real_bits};
use nalgebra::{Point3, Vector2, Vector3};

/// A vertex of a face, holding position, normal and texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Vector2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in level space
    /// * `normal` – the shading normal; it is **copied verbatim**
    /// * `uv`     – the texture coordinate
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>, uv: Vector2<Real>) -> Self {
        Vertex { pos, normal, uv }
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Position and texture coordinate are interpolated linearly. The normal is
    /// interpolated and then renormalized; a blend that cancels out to zero
    /// length stays zero.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        // p(t) = p0 + t * (p1 - p0)
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_uv = self.uv + (other.uv - self.uv) * t;

        let blended = self.normal + (other.normal - self.normal) * t;
        let new_normal = blended.try_normalize(Real::EPSILON).unwrap_or(blended);

        Vertex::new(new_pos, new_normal, new_uv)
    }

    /// Hash key under which two vertices collide exactly when all eight
    /// attribute components are equal.
    pub(crate) fn key(&self) -> VertexKey {
        VertexKey([
            real_bits(self.pos.x),
            real_bits(self.pos.y),
            real_bits(self.pos.z),
            real_bits(self.normal.x),
            real_bits(self.normal.y),
            real_bits(self.normal.z),
            real_bits(self.uv.x),
            real_bits(self.uv.y),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexKey([RealBits; 8]);
