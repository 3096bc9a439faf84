//! Axis-aligned bounding boxes.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// Line-list indices into [`BoundingBox::corners`] for the 12 box edges.
const WIREFRAME_INDICES: [u32; 24] = [
    0, 1, 1, 3, 3, 2, 2, 0, // min-z face
    4, 5, 5, 7, 7, 6, 6, 4, // max-z face
    0, 4, 1, 5, 2, 6, 3, 7, // verticals
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<Real>,
    pub max: Point3<Real>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[Point3<Real>; 2]> for BoundingBox {
    fn from([min, max]: [Point3<Real>; 2]) -> Self {
        Self::new(min, max)
    }
}

impl BoundingBox {
    #[inline]
    pub const fn new(min: Point3<Real>, max: Point3<Real>) -> Self {
        Self { min, max }
    }

    /// The "nothing yet" sentinel: the first point unioned in becomes the box.
    pub const fn empty() -> Self {
        Self {
            min: Point3::new(Real::INFINITY, Real::INFINITY, Real::INFINITY),
            max: Point3::new(Real::NEG_INFINITY, Real::NEG_INFINITY, Real::NEG_INFINITY),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point3<Real>>) -> Self {
        points.into_iter().fold(Self::empty(), |mut bb, p| {
            bb.union_point(&p);
            bb
        })
    }

    /// True until at least one point has been unioned in.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to include `p`. Never shrinks.
    pub fn union_point(&mut self, p: &Point3<Real>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Returns `self` grown to include `p`.
    pub fn with_point(mut self, p: &Point3<Real>) -> Self {
        self.union_point(p);
        self
    }

    /// Range test with a slack of `tolerance() * max(1, |min|, |max|)` per axis.
    ///
    /// Vertices generated by clipping against a split plane may land a few ulps
    /// outside the octant they were assigned to.
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        let tol = tolerance();
        (0..3).all(|axis| {
            let (lo, hi) = (self.min[axis], self.max[axis]);
            let slack = tol * lo.abs().max(hi.abs()).max(1.0);
            p[axis] >= lo - slack && p[axis] <= hi + slack
        })
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.max - self.min
    }

    pub fn volume(&self) -> Real {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// The sub-box for one octant around the center.
    ///
    /// Bit 0 of `index` selects the upper half along x, bit 1 along y and
    /// bit 2 along z.
    pub fn octant(&self, index: usize) -> BoundingBox {
        let (min, max) = octant_range(index, &self.min.coords, &self.center().coords, &self.max.coords);
        BoundingBox::new(Point3::from(min), Point3::from(max))
    }

    /// The 8 corners, in octant bit order.
    pub fn corners(&self) -> [Point3<Real>; 8] {
        std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Corners plus line-list indices for drawing the box edges.
    pub fn wireframe(&self) -> ([Point3<Real>; 8], [u32; 24]) {
        (self.corners(), WIREFRAME_INDICES)
    }
}

/// Picks, per axis, the lower `(lo, mid)` or upper `(mid, hi)` half according
/// to the octant bit for that axis.
///
/// The same convention splits node boxes at build time and parametric slab
/// intervals during collision queries.
pub(crate) fn octant_range(
    index: usize,
    lo: &Vector3<Real>,
    mid: &Vector3<Real>,
    hi: &Vector3<Real>,
) -> (Vector3<Real>, Vector3<Real>) {
    let mut out_lo = *lo;
    let mut out_hi = *mid;
    for axis in 0..3 {
        if index & (1 << axis) != 0 {
            out_lo[axis] = mid[axis];
            out_hi[axis] = hi[axis];
        }
    }
    (out_lo, out_hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_grows_from_empty() {
        let mut bb = BoundingBox::empty();
        assert!(bb.is_empty());
        bb.union_point(&Point3::new(1.0, -2.0, 3.0));
        assert!(!bb.is_empty());
        assert_eq!(bb.min, bb.max);

        bb.union_point(&Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(bb.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(bb.max, Point3::new(1.0, 0.0, 3.0));

        // already inside: no-op
        let before = bb;
        bb.union_point(&Point3::new(0.0, -1.0, 1.0));
        assert_eq!(bb, before);
    }

    #[test]
    fn contains_tolerates_rounding() {
        let bb = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        assert!(bb.contains(&Point3::new(10.0 + tolerance() * 0.5, 5.0, 5.0)));
        assert!(!bb.contains(&Point3::new(10.1, 5.0, 5.0)));
        assert!(!bb.contains(&Point3::new(5.0, -0.5, 5.0)));
    }

    #[test]
    fn octants_partition_the_box() {
        let bb = BoundingBox::new(Point3::new(-2.0, 0.0, 4.0), Point3::new(2.0, 8.0, 6.0));
        let total: Real = (0..8).map(|i| bb.octant(i).volume()).sum();
        assert_eq!(total, bb.volume());

        let upper_x = bb.octant(1);
        assert_eq!(upper_x.min, Point3::new(0.0, 0.0, 4.0));
        assert_eq!(upper_x.max, Point3::new(2.0, 4.0, 5.0));

        let all_upper = bb.octant(7);
        assert_eq!(all_upper.min, bb.center());
        assert_eq!(all_upper.max, bb.max);
    }

    #[test]
    fn corners_follow_octant_bits() {
        let bb = BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0));
        let (corners, indices) = bb.wireframe();
        assert_eq!(corners[0], bb.min);
        assert_eq!(corners[7], bb.max);
        assert_eq!(corners[5], Point3::new(1.0, 0.0, 3.0));
        assert!(indices.iter().all(|&i| i < 8));
    }
}
