//! Serial implementation of batch collision queries

use crate::float_types::Real;
use crate::octree::Octree;
use crate::octree::traits::CollisionQueries;
use crate::ray::LineSegment;
use nalgebra::Point3;

#[derive(Debug, Default, Clone, Copy)]
pub struct SerialQueries;

impl SerialQueries {
    pub const fn new() -> Self {
        Self
    }
}

impl CollisionQueries for SerialQueries {
    fn find_collisions(&self, tree: &Octree, segments: &[LineSegment]) -> Vec<Option<Point3<Real>>> {
        segments
            .iter()
            .map(|segment| tree.find_collision(segment))
            .collect()
    }
}
