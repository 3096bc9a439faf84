//! Read-only walks over a built tree: rendering and segment collision.

use crate::bounding_box::octant_range;
use crate::float_types::Real;
use crate::octree::Octree;
use crate::octree::node::{NodeKind, OctreeNode};
use crate::octree::traits::RenderSink;
use crate::ray::{LineSegment, Ray};
use nalgebra::{Point3, Vector3};

/// Counters gathered during one collision query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes entered, including those rejected by their slab test.
    pub nodes_visited: usize,
    /// Nodes whose box the ray crossed.
    pub nodes_intersected: usize,
    pub triangles_tested: usize,
}

impl Octree {
    /// Depth-first, pre-order: every leaf's batches go to `sink`, children in
    /// octant order 0..7. No culling.
    pub fn render<R: RenderSink + ?Sized>(&self, sink: &mut R) {
        if let Some(root) = &self.root {
            root.render(sink);
        }
    }

    /// Walk every node in render order with its depth (root = 0).
    pub fn visit_nodes<F: FnMut(&OctreeNode, usize)>(&self, mut f: F) {
        if let Some(root) = &self.root {
            root.visit(0, &mut f);
        }
    }

    /// Nearest point where `segment` hits level geometry.
    pub fn find_collision(&self, segment: &LineSegment) -> Option<Point3<Real>> {
        self.find_collision_with_stats(segment).0
    }

    /// [`find_collision`](Self::find_collision), also reporting how much of
    /// the tree the query touched.
    pub fn find_collision_with_stats(&self, segment: &LineSegment) -> (Option<Point3<Real>>, QueryStats) {
        let ray = segment.ray();
        let mut stats = QueryStats::default();
        let hit = self
            .nearest_hit(&ray, &mut stats)
            .filter(|t| (0.0..=1.0).contains(t))
            .map(|t| ray.point_at(t));
        (hit, stats)
    }

    /// Parameter `t ≥ 0` of the nearest hit along `ray`, unbounded above.
    pub fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        self.nearest_hit(ray, &mut QueryStats::default())
    }

    fn nearest_hit(&self, ray: &Ray, stats: &mut QueryStats) -> Option<Real> {
        let root = self.root.as_ref()?;
        if ray.direction == Vector3::zeros() {
            return None;
        }

        // Axes with a zero direction produce ±inf or NaN here; the slab test
        // ignores them and checks the origin against the box instead.
        let t_min = (root.bounding_box.min - ray.origin).component_div(&ray.direction);
        let t_max = (root.bounding_box.max - ray.origin).component_div(&ray.direction);

        let mut nearest = None;
        root.find_collision(ray, &t_min, &t_max, &mut nearest, stats);
        nearest
    }
}

impl OctreeNode {
    fn render<R: RenderSink + ?Sized>(&self, sink: &mut R) {
        match &self.kind {
            NodeKind::Leaf(leaf) => {
                for batch in &leaf.batches {
                    sink.draw(batch);
                }
            },
            NodeKind::Internal(children) => {
                for child in children.iter().flatten() {
                    child.render(sink);
                }
            },
        }
    }

    fn visit<F: FnMut(&OctreeNode, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        for (_, child) in self.children() {
            child.visit(depth + 1, f);
        }
    }

    /// Slab test for this node given its parametric bounds
    /// `t_min = (box.min - origin) / dir` and `t_max = (box.max - origin) / dir`.
    fn slab_intersects(&self, ray: &Ray, t_min: &Vector3<Real>, t_max: &Vector3<Real>) -> bool {
        let mut close = Real::NEG_INFINITY;
        let mut far = Real::INFINITY;
        for axis in 0..3 {
            if ray.direction[axis] == 0.0 {
                let o = ray.origin[axis];
                if o < self.bounding_box.min[axis] || o > self.bounding_box.max[axis] {
                    return false;
                }
                continue;
            }
            close = close.max(t_min[axis].min(t_max[axis]));
            far = far.min(t_min[axis].max(t_max[axis]));
        }
        close < far
    }

    /// Collision walk. Every present child of an intersected node is entered
    /// and decides for itself whether the ray crosses it; a hit already found
    /// never cuts the walk short.
    fn find_collision(
        &self,
        ray: &Ray,
        t_min: &Vector3<Real>,
        t_max: &Vector3<Real>,
        nearest: &mut Option<Real>,
        stats: &mut QueryStats,
    ) {
        stats.nodes_visited += 1;
        if !self.slab_intersects(ray, t_min, t_max) {
            return;
        }
        stats.nodes_intersected += 1;

        match &self.kind {
            NodeKind::Leaf(leaf) => {
                for triangle in &leaf.triangles {
                    stats.triangles_tested += 1;
                    if let Some(t) = triangle.intersect_ray(ray) {
                        if nearest.is_none_or(|best| t < best) {
                            *nearest = Some(t);
                        }
                    }
                }
            },
            NodeKind::Internal(_) => {
                let t_mid = (t_min + t_max) * 0.5;
                for (i, child) in self.children() {
                    let (child_min, child_max) = octant_range(i, t_min, &t_mid, t_max);
                    child.find_collision(ray, &child_min, &child_max, nearest, stats);
                }
            },
        }
    }
}
