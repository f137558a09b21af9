mod quadratic;
mod ray_triangle_intersection;
mod triangle;

use nalgebra::{Matrix4, Point2, Point3, Unit, Vector2, Vector3};

pub use quadratic::quadratic_roots;
pub use triangle::{BarycentricCoordinates, Triangle};

pub type FloatType = f64;

/// Vectors shorter than this are treated as zero.
pub const EPSILON: FloatType = 1e-12;

pub type ScreenPoint = Point2<u32>;
pub type ScreenSize = Vector2<u32>;

pub type WorldPoint = Point3<FloatType>;
pub type WorldVector = Vector3<FloatType>;

/// Homogeneous 4x4 transform placing primitives in world space.
pub type WorldTransform = Matrix4<FloatType>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Normalized direction of the ray
    pub direction: Unit<WorldVector>,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    /// Direction must be non-zero, otherwise the ray is full of NaNs; use `try_new` when
    /// that is not guaranteed.
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray {
            origin,
            direction: Unit::new_normalize(direction),
        }
    }

    pub fn try_new(origin: WorldPoint, direction: WorldVector) -> Option<Ray> {
        let direction = Unit::try_new(direction, EPSILON)?;
        Some(Ray { origin, direction })
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction.as_ref() * distance
    }
}
