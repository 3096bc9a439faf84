//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use leveltree::{
    BoundingBox, Face, MaterialId, Octree, Real, Vertex,
    octree::{Leaf, OctreeNode},
};
use nalgebra::{Point3, Vector2, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a face from corner positions. The normal is computed from
/// the first three corners; uvs are the x/y coordinates.
pub fn make_face(material: u32, points: &[[Real; 3]]) -> Face {
    let p: Vec<Point3<Real>> = points.iter().map(|c| Point3::new(c[0], c[1], c[2])).collect();
    let normal = (p[1] - p[0])
        .cross(&(p[2] - p[0]))
        .try_normalize(Real::EPSILON)
        .unwrap_or_else(Vector3::z);
    let vertices = p
        .iter()
        .map(|&pos| Vertex::new(pos, normal, Vector2::new(pos.x, pos.y)))
        .collect();
    Face::new(MaterialId(material), vertices).unwrap()
}

/// Floor quad at `y = 0` spanning `x, z ∈ [-1, 1]`.
pub fn floor() -> Face {
    make_face(
        0,
        &[
            [-1.0, 0.0, -1.0],
            [-1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 0.0, -1.0],
        ],
    )
}

/// Wall quad at `x = 1` spanning `y ∈ [0, 2]`, `z ∈ [-1, 1]`.
pub fn wall() -> Face {
    make_face(
        1,
        &[
            [1.0, 0.0, -1.0],
            [1.0, 0.0, 1.0],
            [1.0, 2.0, 1.0],
            [1.0, 2.0, -1.0],
        ],
    )
}

/// An `n × n` grid of unit quads in the plane `z = z`, starting at the origin.
pub fn grid(material: u32, n: usize, z: Real) -> Vec<Face> {
    let mut faces = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let (x, y) = (i as Real, j as Real);
            faces.push(make_face(
                material,
                &[
                    [x, y, z],
                    [x + 1.0, y, z],
                    [x + 1.0, y + 1.0, z],
                    [x, y + 1.0, z],
                ],
            ));
        }
    }
    faces
}

/// All leaves with their boxes, in render order.
pub fn leaves(tree: &Octree) -> Vec<(BoundingBox, Leaf)> {
    let mut out = Vec::new();
    tree.visit_nodes(|node: &OctreeNode, _| {
        if let Some(leaf) = node.leaf() {
            out.push((node.bounding_box, leaf.clone()));
        }
    });
    out
}

/// Union of every vertex position of `faces`.
pub fn bounding_box(faces: &[Face]) -> BoundingBox {
    BoundingBox::from_points(faces.iter().flat_map(|f| f.vertices.iter().map(|v| v.pos)))
}
