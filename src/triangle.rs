//! Position-only triangles used for collision.

use crate::bounding_box::BoundingBox;
use crate::float_types::{PARALLEL_EPSILON, Real};
use crate::ray::Ray;
use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3<Real>,
    pub v1: Point3<Real>,
    pub v2: Point3<Real>,
}

impl Triangle {
    pub const fn new(v0: Point3<Real>, v1: Point3<Real>, v2: Point3<Real>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Unit normal following the right-hand rule, or `None` for a degenerate triangle.
    pub fn normal(&self) -> Option<Vector3<Real>> {
        (self.v1 - self.v0)
            .cross(&(self.v2 - self.v0))
            .try_normalize(Real::EPSILON)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points([self.v0, self.v1, self.v2])
    }

    /// Möller–Trumbore ray/triangle intersection.
    ///
    /// Returns the ray parameter `t ≥ 0` of the hit. Rays within
    /// [`PARALLEL_EPSILON`] of parallel, and hits outside the triangle, are
    /// `None`. Barycentrics are divided by the determinant rather than scaled
    /// by its reciprocal so that hits on a vertex or edge come out as exact
    /// 0 or 1.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Real> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(&edge2);
        let det = edge1.dot(&h);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let s = ray.origin - self.v0;
        let u = s.dot(&h) / det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = ray.direction.dot(&q) / det;
        if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(&q) / det;
        (t >= 0.0).then_some(t)
    }
}
