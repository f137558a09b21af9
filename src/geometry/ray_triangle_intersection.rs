use nalgebra::Unit;

use super::{BarycentricCoordinates, FloatType, Ray, Triangle, WorldPoint, WorldVector};

/// Result of a ray hitting a single triangle.
#[derive(Copy, Clone, Debug)]
pub struct TriangleHit {
    pub t: FloatType,
    pub normal: Unit<WorldVector>,
    pub barycentric: BarycentricCoordinates,
}

impl Triangle<WorldPoint> {
    /// Calculates ray intersection with the (two sided) triangle.
    ///
    /// Intersects the ray with the supporting plane (anchored at the centroid), then weighs
    /// the plane point by the signed areas of the sub-triangles it forms with each edge.
    /// Returns the distance along the ray, the unit plane normal (winding order
    /// `self[0] -> self[1] -> self[2]`, not flipped toward the ray) and the barycentric
    /// coordinates. Degenerate triangles, rays parallel to the plane and hits behind the
    /// origin are misses.
    pub fn intersect(&self, ray: &Ray) -> Option<TriangleHit> {
        let cross = (self[1] - self[0]).cross(&(self[2] - self[0]));
        let total_area = 0.5 * cross.norm();
        if !(total_area > 0.0) {
            return None;
        }
        let normal = Unit::new_unchecked(cross / (2.0 * total_area));

        let delta = ray.origin - self.centroid();
        // Parallel rays divide by (nearly) zero; the resulting infinities fail the membership
        // test below.
        let t = -delta.dot(normal.as_ref()) / ray.direction.dot(normal.as_ref());
        if !(t >= 0.0) || !t.is_finite() {
            return None;
        }
        let p = ray.point_at(t);

        let s1 = 0.5 * (self[2] - self[1]).cross(&(p - self[1])).dot(normal.as_ref());
        let s2 = 0.5 * (self[0] - self[2]).cross(&(p - self[2])).dot(normal.as_ref());
        let barycentric = BarycentricCoordinates {
            alpha: s1 / total_area,
            beta: s2 / total_area,
        };

        barycentric.is_inside().then_some(TriangleHit {
            t,
            normal,
            barycentric,
        })
    }
}
