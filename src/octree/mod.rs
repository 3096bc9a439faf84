//! Octree over static level geometry
//!
//! The tree is built once from a face list by bisecting each node's box at its
//! center along all three axes, clipping faces that straddle the center
//! planes. A node with few enough faces becomes a leaf holding per-material
//! render batches and a flat list of collision triangles. After construction
//! the tree is immutable, so any number of threads may render or query it.

pub mod build;
pub mod config;
pub mod leaf;
pub mod node;
pub mod traits;
pub mod traverse;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::{DEFAULT_MAX_DEPTH, MAX_FACES_PER_LEAF, OctreeConfig};
pub use node::{Leaf, NodeKind, OctreeNode, RenderBatch};
pub use traits::{CollisionQueries, RenderSink};
pub use traverse::QueryStats;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialQueries;

#[cfg(feature = "parallel")]
pub use parallel::ParallelQueries;

use crate::bounding_box::BoundingBox;
use crate::errors::ValidationError;
use crate::face::Face;
use crate::float_types::Real;
use crate::ray::LineSegment;
use build::Builder;
use log::{info, warn};
use nalgebra::Point3;

#[derive(Debug, Clone)]
pub struct Octree {
    root: Option<OctreeNode>,
    config: OctreeConfig,
}

/// Shape summary of a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub internal_nodes: usize,
    /// Depth of the deepest node (root = 0).
    pub max_depth: usize,
    /// Sum of face counts over all leaves. A face clipped into several
    /// octants counts once per octant.
    pub leaf_faces: usize,
    pub triangles: usize,
    pub batches: usize,
    /// Leaves holding more faces than the threshold because the depth cap hit.
    pub overfull_leaves: usize,
}

impl Octree {
    /// Build a tree with the default [`OctreeConfig`].
    pub fn build(faces: Vec<Face>) -> Self {
        Self::build_validated(faces, OctreeConfig::default())
    }

    pub fn build_with_config(faces: Vec<Face>, config: &OctreeConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self::build_validated(faces, config.clone()))
    }

    fn build_validated(faces: Vec<Face>, config: OctreeConfig) -> Self {
        let bb = BoundingBox::from_points(faces.iter().flat_map(|f| f.vertices.iter().map(|v| v.pos)));
        let input_faces = faces.len();

        let root = (!faces.is_empty()).then(|| Builder::new(&config).build_node(bb, faces, 0));
        let tree = Octree { root, config };

        let stats = tree.stats();
        info!(
            "octree built from {input_faces} faces: {} nodes ({} leaves, depth {}), {} triangles in {} batches",
            stats.nodes, stats.leaves, stats.max_depth, stats.triangles, stats.batches
        );
        if stats.overfull_leaves > 0 {
            warn!(
                "{} leaves exceed {} faces after hitting the depth cap",
                stats.overfull_leaves, tree.config.max_faces_per_leaf
            );
        }
        tree
    }

    pub const fn root(&self) -> Option<&OctreeNode> {
        self.root.as_ref()
    }

    pub const fn config(&self) -> &OctreeConfig {
        &self.config
    }

    /// Union of every input vertex; `None` for a tree built from no faces.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.root.as_ref().map(|root| &root.bounding_box)
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        self.visit_nodes(|node, depth| {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    stats.leaves += 1;
                    stats.leaf_faces += leaf.face_count;
                    stats.triangles += leaf.triangles.len();
                    stats.batches += leaf.batches.len();
                    if leaf.face_count > self.config.max_faces_per_leaf {
                        stats.overfull_leaves += 1;
                    }
                },
                NodeKind::Internal(_) => stats.internal_nodes += 1,
            }
        });
        stats
    }

    /// Nearest hit for each segment, in input order.
    #[cfg(not(feature = "parallel"))]
    pub fn find_collisions(&self, segments: &[LineSegment]) -> Vec<Option<Point3<Real>>> {
        SerialQueries::new().find_collisions(self, segments)
    }

    #[cfg(feature = "parallel")]
    pub fn find_collisions(&self, segments: &[LineSegment]) -> Vec<Option<Point3<Real>>> {
        ParallelQueries::new().find_collisions(self, segments)
    }
}
