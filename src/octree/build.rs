//! Recursive octree construction.

use crate::bounding_box::BoundingBox;
use crate::face::Face;
use crate::float_types::Real;
use crate::octree::config::OctreeConfig;
use crate::octree::node::{Leaf, NodeKind, OctreeNode};
use crate::plane::Plane;
use log::{debug, trace};
use nalgebra::Point3;

/// Clip `face` against the three axis planes through `center` (x, then y,
/// then z) and tag each surviving piece with its octant index.
///
/// Bit `axis` of the index is set for pieces on the non-negative side of that
/// axis' plane, matching [`BoundingBox::octant`].
pub fn split_into_octants(face: Face, center: &Point3<Real>) -> Vec<(usize, Face)> {
    let mut parts = vec![(0usize, face)];
    for axis in 0..3 {
        let plane = Plane::axis(axis, *center);
        parts = parts
            .into_iter()
            .flat_map(|(index, part)| {
                let (back, front) = plane.split_face(&part);
                back.map(|f| (index, f))
                    .into_iter()
                    .chain(front.map(|f| (index | (1 << axis), f)))
            })
            .collect();
    }
    parts
}

pub(crate) struct Builder<'a> {
    config: &'a OctreeConfig,
}

impl<'a> Builder<'a> {
    pub(crate) const fn new(config: &'a OctreeConfig) -> Self {
        Self { config }
    }

    /// Build the subtree for `faces`, all of which must lie inside `bb`.
    ///
    /// # Panics
    /// If a vertex lies outside `bb` beyond tolerance. That can only come from
    /// a clipping or bucketing defect, never from input data.
    pub(crate) fn build_node(&self, bb: BoundingBox, faces: Vec<Face>, depth: usize) -> OctreeNode {
        for face in &faces {
            for vertex in &face.vertices {
                assert!(
                    bb.contains(&vertex.pos),
                    "vertex {} lies outside its node box [{} .. {}] at depth {}",
                    vertex.pos,
                    bb.min,
                    bb.max,
                    depth
                );
            }
        }

        if faces.len() <= self.config.max_faces_per_leaf || self.config.depth_capped(depth) {
            if faces.len() > self.config.max_faces_per_leaf {
                debug!(
                    "depth cap {depth} reached with {} faces in [{} .. {}]",
                    faces.len(),
                    bb.min,
                    bb.max
                );
            }
            trace!("leaf at depth {depth} with {} faces", faces.len());
            return OctreeNode {
                bounding_box: bb,
                kind: NodeKind::Leaf(Leaf::from_faces(&faces, self.config.polygon_edges)),
            };
        }

        let center = bb.center();
        let mut buckets: [Vec<Face>; 8] = Default::default();
        for face in faces {
            for (index, part) in split_into_octants(face, &center) {
                buckets[index].push(part);
            }
        }

        trace!(
            "internal node at depth {depth}, bucket sizes {:?}",
            buckets.each_ref().map(Vec::len)
        );

        let children: [Option<OctreeNode>; 8] = std::array::from_fn(|i| {
            let bucket = std::mem::take(&mut buckets[i]);
            (!bucket.is_empty()).then(|| self.build_node(bb.octant(i), bucket, depth + 1))
        });

        OctreeNode {
            bounding_box: bb,
            kind: NodeKind::Internal(Box::new(children)),
        }
    }
}
