//! Traits at the seams between the tree and its collaborators.

use crate::float_types::Real;
use crate::octree::Octree;
use crate::octree::node::RenderBatch;
use crate::ray::LineSegment;
use nalgebra::Point3;

/// Consumer of leaf geometry during the render walk; owns all GPU state.
pub trait RenderSink {
    fn draw(&mut self, batch: &RenderBatch);
}

impl<F: FnMut(&RenderBatch)> RenderSink for F {
    fn draw(&mut self, batch: &RenderBatch) {
        self(batch)
    }
}

/// Runs many independent segment queries against one tree.
pub trait CollisionQueries {
    fn find_collisions(&self, tree: &Octree, segments: &[LineSegment]) -> Vec<Option<Point3<Real>>>;
}
