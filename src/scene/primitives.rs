use std::sync::Arc;

use nalgebra::Unit;

use crate::geometry::{
    self, FloatType, Ray, ScreenPoint, ScreenSize, WorldPoint, WorldTransform, quadratic_roots,
};

use super::{HitRecord, Object, material::Material};

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType) -> Self {
        Sphere { center, radius }
    }
}

impl Object for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        if !(self.radius > 0.0) {
            return None;
        }

        let oc = ray.origin - self.center;
        // Direction is unit length, so the quadratic coefficient is one.
        let b = 2.0 * ray.direction.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let roots = quadratic_roots(1.0, b, c);

        // Roots are sorted. Origin inside or behind the sphere: take the far root.
        let (&near, &far) = (roots.first()?, roots.last()?);
        let t = if near < 0.0 { far } else { near };
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        let normal = Unit::try_new(point - self.center, geometry::EPSILON)?;

        Some(HitRecord { t, point, normal })
    }

    fn transform(&mut self, transform: &WorldTransform) {
        self.center = transform.transform_point(&self.center);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: geometry::Triangle<WorldPoint>,
}

impl Triangle {
    pub fn new(a: WorldPoint, b: WorldPoint, c: WorldPoint) -> Self {
        Triangle {
            vertices: geometry::Triangle::new(a, b, c),
        }
    }
}

impl Object for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let hit = self.vertices.intersect(ray)?;
        Some(HitRecord {
            t: hit.t,
            point: ray.point_at(hit.t),
            normal: hit.normal,
        })
    }

    fn transform(&mut self, transform: &WorldTransform) {
        self.vertices = self.vertices.transformed(transform);
    }
}

/// Planar convex quad `a, b, c, d`, split along the `a-c` diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    corners: [WorldPoint; 4],
    triangles: [Triangle; 2],
}

impl Quad {
    pub fn new(a: WorldPoint, b: WorldPoint, c: WorldPoint, d: WorldPoint) -> Self {
        Quad {
            corners: [a, b, c, d],
            triangles: [Triangle::new(a, b, c), Triangle::new(a, c, d)],
        }
    }

    pub fn corners(&self) -> &[WorldPoint; 4] {
        &self.corners
    }

    pub fn triangles(&self) -> &[Triangle; 2] {
        &self.triangles
    }

    /// Maps an image pixel onto the quad used as an image plane.
    ///
    /// Pixel (0, 0) lands on corner `a`, columns advance toward `d` and rows advance by
    /// `a - b`, i.e. away from `b`.
    pub fn pixel_to_world(&self, pixel: ScreenPoint, resolution: ScreenSize) -> WorldPoint {
        let [top_left, bottom_left, _, top_right] = self.corners;

        let right = top_right - top_left;
        let down = top_left - bottom_left;

        let h_pct = pixel.x as FloatType / resolution.x as FloatType;
        let v_pct = pixel.y as FloatType / resolution.y as FloatType;

        top_left + right * h_pct + down * v_pct
    }
}

impl Object for Quad {
    /// At most one of the two triangles of a convex quad can be hit, the first one wins.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        self.triangles
            .iter()
            .find_map(|triangle| triangle.intersect(ray))
    }

    fn transform(&mut self, transform: &WorldTransform) {
        for corner in &mut self.corners {
            *corner = transform.transform_point(corner);
        }
        for triangle in &mut self.triangles {
            triangle.transform(transform);
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
    Quad(Quad),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "Sphere",
            Shape::Triangle(_) => "Triangle",
            Shape::Quad(_) => "Quad",
        }
    }
}

impl Object for Shape {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
            Shape::Quad(quad) => quad.intersect(ray),
        }
    }

    fn transform(&mut self, transform: &WorldTransform) {
        match self {
            Shape::Sphere(sphere) => sphere.transform(transform),
            Shape::Triangle(triangle) => triangle.transform(transform),
            Shape::Quad(quad) => quad.transform(transform),
        }
    }
}

/// Renderable shape with its material.
#[derive(Clone, Debug)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Arc<Material>,
}

impl Primitive {
    pub fn new(shape: Shape, material: Arc<Material>) -> Self {
        Primitive { shape, material }
    }

    pub fn sphere(center: WorldPoint, radius: FloatType, material: Arc<Material>) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), material)
    }

    pub fn triangle(a: WorldPoint, b: WorldPoint, c: WorldPoint, material: Arc<Material>) -> Self {
        Self::new(Shape::Triangle(Triangle::new(a, b, c)), material)
    }

    pub fn quad(
        a: WorldPoint,
        b: WorldPoint,
        c: WorldPoint,
        d: WorldPoint,
        material: Arc<Material>,
    ) -> Self {
        Self::new(Shape::Quad(Quad::new(a, b, c, d)), material)
    }

    /// Consuming version of `transform`, for building scenes.
    pub fn transformed(mut self, transform: &WorldTransform) -> Self {
        self.transform(transform);
        self
    }
}

impl Object for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        self.shape.intersect(ray)
    }

    fn transform(&mut self, transform: &WorldTransform) {
        self.shape.transform(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{
        WorldVector,
        test::{PositiveDistanceWrapper, UnitWorldVectorWrapper, WorldPointWrapper},
    };
    use assert2::assert;
    use test_case::test_case;
    use test_strategy::proptest;

    fn unit_quad() -> Quad {
        Quad::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 0.0, 0.0),
            WorldPoint::new(1.0, 1.0, 0.0),
            WorldPoint::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_direct_hit_through_center() {
        let sphere = Sphere::new([1.0, 2.0, 3.0].into(), 1.0);
        let ray = Ray::new([1.0, 2.0, 0.0].into(), [0.0, 0.0, 1.0].into());
        let hit = sphere.intersect(&ray);

        let h = hit.expect("We should have a hit!");
        assert!((h.t - 2.0).abs() < 1e-12);
        assert!(h.normal.into_inner() == WorldVector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_grazing_hit() {
        let sphere = Sphere::new([1.0, 2.0, 3.0].into(), 1.0);
        let ray = Ray::new([2.0, 2.0, 0.0].into(), [0.0, 0.0, 1.0].into());
        let hit = sphere.intersect(&ray);

        let h = hit.expect("We should have a hit!");
        assert!((h.t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_narrow_miss() {
        let sphere = Sphere::new([1.0, 2.0, 3.0].into(), 1.0);
        let ray = Ray::new([2.0, 2.01, 0.0].into(), [0.0, 0.0, 1.0].into());
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new([0.0, 0.0, 0.0].into(), 2.0);
        let ray = Ray::new([0.0, 0.0, 0.0].into(), [1.0, 0.0, 0.0].into());
        let h = sphere.intersect(&ray).expect("We should have a hit!");

        assert!((h.t - 2.0).abs() < 1e-12);
        // Not flipped toward the ray
        assert!(h.normal.into_inner() == WorldVector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new([0.0, 0.0, 5.0].into(), 1.0);
        let ray = Ray::new([0.0, 0.0, 0.0].into(), [0.0, 0.0, -1.0].into());
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-1.0 ; "negative")]
    #[test_case(FloatType::NAN ; "nan")]
    fn degenerate_sphere_never_hits(radius: FloatType) {
        let sphere = Sphere::new([0.0, 0.0, -5.0].into(), radius);
        let ray = Ray::new([0.0, 0.0, 0.0].into(), [0.0, 0.0, -1.0].into());
        assert!(sphere.intersect(&ray).is_none());
    }

    /// A ray pointing at the center from outside hits at the analytic distance
    /// with a unit normal pointing back along the ray.
    #[proptest]
    fn sphere_hit_matches_analytic_root(
        center: WorldPointWrapper,
        radius: PositiveDistanceWrapper,
        direction: UnitWorldVectorWrapper,
        gap: PositiveDistanceWrapper,
    ) {
        let sphere = Sphere::new(*center, *radius);
        let origin = *center + direction.as_ref() * (*radius + *gap);
        let ray = Ray::new(origin, -direction.into_inner());

        let hit = sphere.intersect(&ray).expect("The ray points at the center");
        let scale = center.coords.norm() + *radius + *gap;

        assert!((hit.t - *gap).abs() < 1e-9 * scale);
        assert!((hit.normal.norm() - 1.0).abs() < 1e-12);
        let expected_normal = (hit.point - sphere.center).normalize();
        assert!((hit.normal.into_inner() - expected_normal).norm() < 1e-9);
        assert!((hit.normal.into_inner() - direction.into_inner()).norm() < 1e-6);
    }

    #[test]
    fn quad_picks_the_right_triangle() {
        let quad = unit_quad();
        let lower = Ray::new([0.75, 0.25, 1.0].into(), [0.0, 0.0, -1.0].into());
        let upper = Ray::new([0.25, 0.75, 1.0].into(), [0.0, 0.0, -1.0].into());

        assert!(quad.triangles()[0].intersect(&lower).is_some());
        assert!(quad.triangles()[1].intersect(&lower).is_none());
        assert!(quad.triangles()[0].intersect(&upper).is_none());
        assert!(quad.triangles()[1].intersect(&upper).is_some());

        assert!((quad.intersect(&lower).expect("inside the quad").t - 1.0).abs() < 1e-12);
        assert!((quad.intersect(&upper).expect("inside the quad").t - 1.0).abs() < 1e-12);
    }

    /// Every ray through the interior hits exactly one of the triangles.
    #[proptest]
    fn quad_coverage(#[strategy(0.001f64..0.999)] u: f64, #[strategy(0.001f64..0.999)] v: f64) {
        proptest::prop_assume!((u - v).abs() > 1e-6);
        let quad = unit_quad();
        let direction = WorldVector::new(0.1, -0.2, -1.0);
        let ray = Ray::new(WorldPoint::new(u, v, 0.0) - direction * 3.0, direction);

        let hits = quad
            .triangles()
            .iter()
            .filter(|t| t.intersect(&ray).is_some())
            .count();
        assert!(hits == 1);
    }

    #[test]
    fn quad_outside_is_a_miss() {
        let ray = Ray::new([1.5, 0.5, 1.0].into(), [0.0, 0.0, -1.0].into());
        assert!(unit_quad().intersect(&ray).is_none());
    }

    #[test_case(0, 0, WorldPoint::new(0.0, 0.0, 0.0) ; "origin")]
    #[test_case(5, 0, WorldPoint::new(0.5, 0.0, 0.0) ; "half_width")]
    #[test_case(0, 5, WorldPoint::new(0.0, -0.5, 0.0) ; "half_height")]
    #[test_case(10, 10, WorldPoint::new(1.0, -1.0, 0.0) ; "far_corner")]
    fn pixel_mapping(x: u32, y: u32, expected: WorldPoint) {
        let image_plane = Quad::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(0.0, 1.0, 0.0),
            WorldPoint::new(1.0, 1.0, 0.0),
            WorldPoint::new(1.0, 0.0, 0.0),
        );
        let p = image_plane.pixel_to_world(ScreenPoint::new(x, y), ScreenSize::new(10, 10));
        assert!((p - expected).norm() < 1e-12);
    }

    #[test]
    fn quad_transform_moves_corners_and_triangles() {
        let shift = WorldTransform::new_translation(&WorldVector::new(0.0, 0.0, -2.0));
        let mut quad = unit_quad();
        quad.transform(&shift);

        assert!(quad.corners()[2] == WorldPoint::new(1.0, 1.0, -2.0));
        let ray = Ray::new([0.5, 0.25, 0.0].into(), [0.0, 0.0, -1.0].into());
        assert!((quad.intersect(&ray).expect("moved quad").t - 2.0).abs() < 1e-12);
    }

    /// Applying the identity leaves intersections unchanged.
    #[proptest]
    fn identity_transform_is_idempotent(
        origin: WorldPointWrapper,
        direction: UnitWorldVectorWrapper,
    ) {
        let shapes = [
            Shape::Sphere(Sphere::new([0.0, 0.0, -5.0].into(), 2.0)),
            Shape::Triangle(Triangle::new(
                [-3.0, -3.0, -4.0].into(),
                [3.0, -3.0, -4.0].into(),
                [0.0, 3.0, -6.0].into(),
            )),
            Shape::Quad(unit_quad()),
        ];
        let ray = Ray::new(*origin, direction.into_inner());

        for shape in shapes {
            let mut transformed = shape.clone();
            transformed.transform(&WorldTransform::identity());
            assert!(transformed == shape);
            assert!(transformed.intersect(&ray) == shape.intersect(&ray));
        }
    }

    #[test]
    fn shape_names() {
        assert!(Shape::Quad(unit_quad()).name() == "Quad");
        assert!(Shape::Sphere(Sphere::new(WorldPoint::origin(), 1.0)).name() == "Sphere");
    }
}
