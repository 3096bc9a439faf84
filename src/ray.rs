//! Rays and line segments.

use crate::bounding_box::BoundingBox;
use crate::float_types::Real;
use crate::triangle::Triangle;
use nalgebra::{Point3, Vector3};

/// A half-line `origin + t * direction`, `t ≥ 0`.
///
/// `direction` is not normalized, so the scale of `t` follows its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<Real>,
    pub direction: Vector3<Real>,
}

impl Ray {
    pub const fn new(origin: Point3<Real>, direction: Vector3<Real>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.origin + self.direction * t
    }

    /// See [`Triangle::intersect_ray`].
    #[inline]
    pub fn intersect_triangle(&self, triangle: &Triangle) -> Option<Real> {
        triangle.intersect_ray(self)
    }
}

/// The segment from `from` to `to`; as a ray, valid hits have `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point3<Real>,
    pub to: Point3<Real>,
}

impl LineSegment {
    pub const fn new(from: Point3<Real>, to: Point3<Real>) -> Self {
        Self { from, to }
    }

    pub fn ray(&self) -> Ray {
        Ray::new(self.from, self.to - self.from)
    }

    pub fn length(&self) -> Real {
        (self.to - self.from).norm()
    }

    /// Ray/triangle hit restricted to the segment.
    pub fn intersect_triangle(&self, triangle: &Triangle) -> Option<Real> {
        triangle.intersect_ray(&self.ray()).filter(|&t| t <= 1.0)
    }

    /// Slab test of the segment against `bb`, with the parametric range
    /// clamped to `[0, 1]`. Touching a face counts as intersecting.
    pub fn intersects_box(&self, bb: &BoundingBox) -> bool {
        if bb.is_empty() {
            return false;
        }
        let ray = self.ray();
        let mut t_enter: Real = 0.0;
        let mut t_exit: Real = 1.0;
        for axis in 0..3 {
            let (o, d) = (ray.origin[axis], ray.direction[axis]);
            if d == 0.0 {
                if o < bb.min[axis] || o > bb.max[axis] {
                    return false;
                }
                continue;
            }
            let t0 = (bb.min[axis] - o) / d;
            let t1 = (bb.max[axis] - o) / d;
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
            if t_enter > t_exit {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 5.0),
            Point3::new(1.0, 1.0, 5.0),
        )
    }

    #[test]
    fn segment_rejects_hits_past_its_end() {
        let tri = quad_triangle();
        let segment = LineSegment::new(Point3::new(0.75, 0.5, 2.0), Point3::new(0.75, 0.5, 4.0));
        // the underlying ray does hit, at t = 1.5
        assert_eq!(segment.ray().intersect_triangle(&tri), Some(1.5));
        assert_eq!(segment.intersect_triangle(&tri), None);

        let longer = LineSegment::new(Point3::new(0.75, 0.5, 2.0), Point3::new(0.75, 0.5, 8.0));
        assert_eq!(longer.intersect_triangle(&tri), Some(0.5));
    }

    #[test]
    fn point_at_scales_with_direction() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.point_at(1.5), Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn segment_box_slab_test() {
        let bb = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let through = LineSegment::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(2.0, 0.5, 0.5));
        let short = LineSegment::new(Point3::new(-2.0, 0.5, 0.5), Point3::new(-1.0, 0.5, 0.5));
        let beside = LineSegment::new(Point3::new(-1.0, 1.5, 0.5), Point3::new(2.0, 1.5, 0.5));
        let inside = LineSegment::new(Point3::new(0.25, 0.25, 0.25), Point3::new(0.5, 0.5, 0.5));

        assert!(through.intersects_box(&bb));
        assert!(!short.intersects_box(&bb));
        assert!(!beside.intersects_box(&bb));
        assert!(inside.intersects_box(&bb));
        assert!(!inside.intersects_box(&BoundingBox::empty()));
    }
}
