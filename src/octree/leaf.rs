//! Leaf materialization: per-material render batches and collision triangles.

use crate::face::Face;
use crate::material::MaterialId;
use crate::octree::node::{Leaf, RenderBatch};
use crate::vertex::{Vertex, VertexKey};
use hashbrown::HashMap;
use std::collections::BTreeMap;

impl Leaf {
    /// Build leaf geometry from the faces that ended up in one node.
    pub fn from_faces(faces: &[Face], polygon_edges: bool) -> Self {
        let mut by_material: BTreeMap<MaterialId, Vec<&Face>> = BTreeMap::new();
        for face in faces {
            by_material.entry(face.material).or_default().push(face);
        }

        let batches = by_material
            .into_iter()
            .map(|(material, faces)| RenderBatch::from_faces(material, &faces, polygon_edges))
            .collect();

        let triangles = faces.iter().flat_map(|face| face.triangles()).collect();

        Leaf {
            batches,
            triangles,
            face_count: faces.len(),
        }
    }
}

impl RenderBatch {
    /// Deduplicate the vertices of `faces` (exact match on every attribute)
    /// and fan-triangulate each face into the index buffer.
    pub fn from_faces(material: MaterialId, faces: &[&Face], polygon_edges: bool) -> Self {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut lookup: HashMap<VertexKey, u32> = HashMap::new();
        let mut indices = Vec::new();
        let mut edge_indices = Vec::new();

        for face in faces {
            let face_indices: Vec<u32> = face
                .vertices
                .iter()
                .map(|v| {
                    *lookup.entry(v.key()).or_insert_with(|| {
                        vertices.push(*v);
                        (vertices.len() - 1) as u32
                    })
                })
                .collect();

            for [a, b, c] in face.fan_indices() {
                indices.extend([face_indices[a], face_indices[b], face_indices[c]]);
            }

            if polygon_edges {
                let n = face_indices.len();
                for i in 0..n {
                    edge_indices.push(face_indices[i]);
                    edge_indices.push(face_indices[(i + 1) % n]);
                }
            }
        }

        RenderBatch {
            material,
            vertices,
            indices,
            edge_indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
