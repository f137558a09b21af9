use std::ops::Index;

use super::{FloatType, WorldPoint, WorldTransform, WorldVector};

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle<Point>([Point; 3]);

impl<Point> Triangle<Point> {
    pub fn new(a: Point, b: Point, c: Point) -> Triangle<Point> {
        Triangle([a, b, c])
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Point> {
        self.0.iter()
    }

    pub fn map<Point2, F: FnMut(&Point) -> Point2>(&self, mut f: F) -> Triangle<Point2> {
        Triangle([f(&self[0]), f(&self[1]), f(&self[2])])
    }
}

impl<Point> Index<usize> for Triangle<Point> {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Triangle<WorldPoint> {
    pub fn centroid(&self) -> WorldPoint {
        WorldPoint::from(self.iter().map(|p| p.coords).sum::<WorldVector>() / 3.0)
    }

    /// Returns edge vectors, coming from self[0]
    pub fn edges(&self) -> [WorldVector; 2] {
        [self[1] - self[0], self[2] - self[0]]
    }

    /// Returns a normal vector of the triangle, not normalized.
    /// Its length is twice the triangle area.
    pub fn normal(&self) -> WorldVector {
        let [e1, e2] = self.edges();
        e1.cross(&e2)
    }

    pub fn area(&self) -> FloatType {
        0.5 * self.normal().norm()
    }

    pub fn transformed(&self, transform: &WorldTransform) -> Triangle<WorldPoint> {
        self.map(|p| transform.transform_point(p))
    }
}

/// Weights of the three vertices for a point in the triangle's plane.
/// `alpha` belongs to vertex 0, `beta` to vertex 1, the remaining weight to vertex 2.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BarycentricCoordinates {
    pub alpha: FloatType,
    pub beta: FloatType,
}

impl BarycentricCoordinates {
    pub fn gamma(&self) -> FloatType {
        1.0 - self.alpha - self.beta
    }

    /// True if all three weights lie in [0, 1]. NaNs are outside.
    pub fn is_inside(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.alpha) && unit.contains(&self.beta) && unit.contains(&self.gamma())
    }
}
