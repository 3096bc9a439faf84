//! Octree node data structure

use crate::bounding_box::BoundingBox;
use crate::material::MaterialId;
use crate::triangle::Triangle;
use crate::vertex::Vertex;

/// A node of the octree: its box plus either leaf geometry or up to eight
/// children.
#[derive(Debug, Clone)]
pub struct OctreeNode {
    /// The octant of the parent box this node covers (the root covers the
    /// union of all input vertices).
    pub bounding_box: BoundingBox,
    pub kind: NodeKind,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf(Leaf),
    /// Children indexed by octant: bit 0 = upper x half, bit 1 = upper y,
    /// bit 2 = upper z. A slot is `None` when no geometry fell into it.
    Internal(Box<[Option<OctreeNode>; 8]>),
}

/// Terminal node geometry.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    /// One batch per distinct material, ordered by [`MaterialId`].
    pub batches: Vec<RenderBatch>,
    /// Fan triangles of every face in the leaf, across all materials.
    pub triangles: Vec<Triangle>,
    /// Number of (clipped) faces this leaf was built from.
    pub face_count: usize,
}

/// Renderer-ready geometry for one material: a deduplicated vertex buffer and
/// a triangle-list index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBatch {
    pub material: MaterialId,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Line-list outlines of the source polygons. Empty unless
    /// `OctreeConfig::polygon_edges` was set.
    pub edge_indices: Vec<u32>,
}

impl OctreeNode {
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub const fn leaf(&self) -> Option<&Leaf> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Internal(_) => None,
        }
    }

    /// Present children with their octant index, in index order.
    pub fn children(&self) -> impl Iterator<Item = (usize, &OctreeNode)> {
        let slots: &[Option<OctreeNode>] = match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Internal(children) => children.as_slice(),
        };
        slots
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.as_ref().map(|c| (i, c)))
    }

    pub fn child(&self, octant: usize) -> Option<&OctreeNode> {
        match &self.kind {
            NodeKind::Internal(children) => children.get(octant)?.as_ref(),
            NodeKind::Leaf(_) => None,
        }
    }
}
