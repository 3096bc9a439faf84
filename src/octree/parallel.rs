//! Parallel implementation of batch collision queries
//!
//! The tree is immutable after build, so every query borrows it shared and
//! rayon fans the segments out across its pool.

use crate::float_types::Real;
use crate::octree::Octree;
use crate::octree::traits::CollisionQueries;
use crate::ray::LineSegment;
use nalgebra::Point3;
use rayon::prelude::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelQueries;

impl ParallelQueries {
    pub const fn new() -> Self {
        Self
    }
}

impl CollisionQueries for ParallelQueries {
    fn find_collisions(&self, tree: &Octree, segments: &[LineSegment]) -> Vec<Option<Point3<Real>>> {
        segments
            .par_iter()
            .map(|segment| tree.find_collision(segment))
            .collect()
    }
}
