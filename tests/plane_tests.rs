mod support;

use leveltree::{MaterialId, Plane, Real};
use nalgebra::{Point3, Vector3};

use crate::support::{approx_eq, make_face};

#[test]
fn axis_plane() {
    let plane = Plane::axis(1, Point3::new(3.0, 2.0, 1.0));
    assert_eq!(plane.normal, Vector3::y());
    assert_eq!(plane.signed_distance(&Point3::new(0.0, 5.0, 0.0)), 3.0);
    assert!(plane.is_behind(&Point3::new(9.0, 1.0, 9.0)));
    assert!(!plane.is_behind(&Point3::new(9.0, 2.0, 9.0)));
}

#[test]
fn split_square() {
    // a square from (-1, -1) to (1, 1) in the XY plane, cut at y = 0
    let plane = Plane::axis(1, Point3::origin());
    let face = make_face(
        4,
        &[
            [-1.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
            [1.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0],
        ],
    );

    let (back, front) = plane.split_face(&face);
    let back = back.expect("lower half");
    let front = front.expect("upper half");

    assert_eq!(back.vertices.len(), 4);
    assert_eq!(front.vertices.len(), 4);
    assert_eq!(back.material, MaterialId(4));
    assert_eq!(front.material, MaterialId(4));

    for v in &back.vertices {
        assert!(v.pos.y <= 0.0);
    }
    for v in &front.vertices {
        assert!(v.pos.y >= 0.0);
    }

    // the cut vertices are shared bit for bit
    let cut = |face: &leveltree::Face| -> Vec<Point3<Real>> {
        face.vertices.iter().filter(|v| v.pos.y == 0.0).map(|v| v.pos).collect()
    };
    let mut back_cut = cut(&back);
    let mut front_cut = cut(&front);
    let by_x = |a: &Point3<Real>, b: &Point3<Real>| a.x.total_cmp(&b.x);
    back_cut.sort_by(by_x);
    front_cut.sort_by(by_x);
    assert_eq!(back_cut.len(), 2);
    assert_eq!(back_cut, front_cut);
}

#[test]
fn split_interpolates_attributes() {
    let plane = Plane::axis(0, Point3::new(0.25, 0.0, 0.0));
    let face = make_face(0, &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    let (back, front) = plane.split_face(&face);
    let back = back.unwrap();
    let front = front.unwrap();

    // the cut on edge (0,0)-(1,0) sits at x = 0.25 with uv following position
    let on_cut = back
        .vertices
        .iter()
        .find(|v| approx_eq(v.pos.x, 0.25, 1e-9) && approx_eq(v.pos.y, 0.0, 1e-9))
        .expect("cut vertex on the bottom edge");
    assert!(approx_eq(on_cut.uv.x, 0.25, 1e-9));
    assert!(approx_eq(on_cut.normal.norm(), 1.0, 1e-9));

    assert_eq!(back.vertices.len(), 4);
    assert_eq!(front.vertices.len(), 3);
}

#[test]
fn face_on_one_side_has_no_other_part() {
    let plane = Plane::axis(2, Point3::new(0.0, 0.0, 5.0));
    let face = make_face(0, &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    let (back, front) = plane.split_face(&face);
    assert_eq!(back.as_ref(), Some(&face));
    assert!(front.is_none());
}

#[test]
fn vertices_on_plane_go_to_the_front() {
    // coplanar with the splitting plane: everything is non-negative
    let plane = Plane::axis(2, Point3::origin());
    let face = make_face(0, &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    let (back, front) = plane.split_face(&face);
    assert!(back.is_none());
    assert_eq!(front.as_ref(), Some(&face));
}

#[test]
fn touching_vertex_yields_point_sliver() {
    // one vertex exactly on x = 0, the rest behind it
    let plane = Plane::axis(0, Point3::origin());
    let face = make_face(0, &[[-1.0, 0.0, 0.0], [0.0, 0.5, 0.0], [-1.0, 1.0, 0.0]]);

    let (back, front) = plane.split_face(&face);
    let back = back.unwrap();
    let front = front.unwrap();

    // both edges at the touching vertex "cross" with t = 0 or 1, so the
    // front part is three copies of that vertex and has no area
    let touching = Point3::new(0.0, 0.5, 0.0);
    assert_eq!(front.vertices.len(), 3);
    assert!(front.vertices.iter().all(|v| v.pos == touching));
    assert_eq!(back.vertices.len(), 4);
    assert!(back.vertices.iter().all(|v| v.pos.x <= 0.0));
}
