// main.rs
//
// Minimal walkthrough of leveltree: build a procedural arena, draw it into a
// counting sink, and fire a handful of segments through it.
// Run with RUST_LOG=debug to see the build summary and overfull leaves.

use leveltree::{Face, LineSegment, MaterialId, Octree, OctreeConfig, Real, RenderBatch, Vertex};
use log::info;
use nalgebra::{Point3, Vector2, Vector3};

const FLOOR: MaterialId = MaterialId::new(0);
const WALL: MaterialId = MaterialId::new(1);
const PILLAR: MaterialId = MaterialId::new(2);

/// Axis-aligned quad with corner `origin` spanned by `u` and `v`, facing `u × v`.
fn quad(material: MaterialId, origin: Point3<Real>, u: Vector3<Real>, v: Vector3<Real>) -> Face {
    let normal = u.cross(&v).normalize();
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let vertices = corners
        .iter()
        .map(|&(s, t)| Vertex::new(origin + u * s + v * t, normal, Vector2::new(s, t)))
        .collect();
    Face::new(material, vertices).expect("quad corners are finite")
}

/// A tiled floor, four walls and a grid of box pillars.
fn arena(size: usize, height: Real) -> Vec<Face> {
    let mut faces = Vec::new();
    let n = size as Real;

    for i in 0..size {
        for j in 0..size {
            let (x, z) = (i as Real, j as Real);
            faces.push(quad(FLOOR, Point3::new(x, 0.0, z), Vector3::z(), Vector3::x()));
        }
    }

    faces.push(quad(WALL, Point3::new(0.0, 0.0, 0.0), Vector3::x() * n, Vector3::y() * height));
    faces.push(quad(WALL, Point3::new(n, 0.0, n), -Vector3::x() * n, Vector3::y() * height));
    faces.push(quad(WALL, Point3::new(0.0, 0.0, n), -Vector3::z() * n, Vector3::y() * height));
    faces.push(quad(WALL, Point3::new(n, 0.0, 0.0), Vector3::z() * n, Vector3::y() * height));

    for i in (2..size).step_by(4) {
        for j in (2..size).step_by(4) {
            let base = Point3::new(i as Real + 0.25, 0.0, j as Real + 0.25);
            let h = Vector3::y() * (height * 0.75);
            let w = 0.5;
            faces.push(quad(PILLAR, base, Vector3::x() * w, h));
            faces.push(quad(PILLAR, base + Vector3::new(w, 0.0, 0.0), Vector3::z() * w, h));
            faces.push(quad(PILLAR, base + Vector3::new(w, 0.0, w), -Vector3::x() * w, h));
            faces.push(quad(PILLAR, base + Vector3::new(0.0, 0.0, w), -Vector3::z() * w, h));
        }
    }

    faces
}

fn main() {
    env_logger::init();

    let faces = arena(16, 4.0);
    info!("generated {} faces", faces.len());

    let config = OctreeConfig::default().with_max_faces_per_leaf(12);
    let tree = match Octree::build_with_config(faces, &config) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        },
    };

    let stats = tree.stats();
    println!(
        "{} nodes, {} leaves, depth {}, {} collision triangles",
        stats.nodes, stats.leaves, stats.max_depth, stats.triangles
    );

    let mut draws = 0usize;
    let mut indices = 0usize;
    tree.render(&mut |batch: &RenderBatch| {
        draws += 1;
        indices += batch.indices.len();
    });
    println!("render walk: {draws} draw calls, {indices} indices");

    let shots = [
        // straight down onto the floor
        LineSegment::new(Point3::new(5.5, 3.0, 7.5), Point3::new(5.5, -1.0, 7.5)),
        // across the arena into the far wall
        LineSegment::new(Point3::new(1.0, 1.0, 1.0), Point3::new(20.0, 1.0, 1.0)),
        // into the first pillar
        LineSegment::new(Point3::new(0.5, 1.0, 2.5), Point3::new(4.0, 1.0, 2.5)),
        // too short to reach anything
        LineSegment::new(Point3::new(8.0, 2.0, 8.0), Point3::new(8.5, 2.0, 8.0)),
    ];

    for (segment, hit) in shots.iter().zip(tree.find_collisions(&shots)) {
        match hit {
            Some(p) => println!("{} -> {}: hit at {}", segment.from, segment.to, p),
            None => println!("{} -> {}: no hit", segment.from, segment.to),
        }
    }

    let (_, query) = tree.find_collision_with_stats(&shots[1]);
    println!(
        "long shot entered {} nodes, crossed {}, tested {} triangles",
        query.nodes_visited, query.nodes_intersected, query.triangles_tested
    );
}
