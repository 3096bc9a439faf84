//! Build policy for [`Octree`](super::Octree).

use crate::errors::ValidationError;

/// Reference leaf threshold.
pub const MAX_FACES_PER_LEAF: usize = 20;

/// Default subdivision cap. Faces that meet along an edge stay together in
/// every octant touching that edge, so without a cap a low leaf threshold can
/// subdivide until the float precision runs out.
pub const DEFAULT_MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctreeConfig {
    /// A node with at most this many faces becomes a leaf.
    pub max_faces_per_leaf: usize,

    /// Nodes at this depth (root = 0) become leaves regardless of face count.
    /// `None` subdivides without limit.
    pub max_depth: Option<usize>,

    /// Also emit polygon outlines (`RenderBatch::edge_indices`) for debug drawing.
    pub polygon_edges: bool,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_faces_per_leaf: MAX_FACES_PER_LEAF,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            polygon_edges: false,
        }
    }
}

impl OctreeConfig {
    pub const fn with_max_faces_per_leaf(mut self, max_faces_per_leaf: usize) -> Self {
        self.max_faces_per_leaf = max_faces_per_leaf;
        self
    }

    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_polygon_edges(mut self, polygon_edges: bool) -> Self {
        self.polygon_edges = polygon_edges;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_faces_per_leaf == 0 {
            return Err(ValidationError::InvalidConfig(
                "max_faces_per_leaf must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn depth_capped(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}
