pub mod light;
pub mod material;
pub mod primitives;

use bon::Builder;
use nalgebra::Unit;

use crate::{
    camera::Camera,
    geometry::{FloatType, Ray, WorldPoint, WorldTransform, WorldVector},
};

pub use light::Light;
pub use material::{Diffuse, Material};
pub use primitives::{Primitive, Quad, Shape, Sphere, Triangle};

/// Intersection of a ray with a single object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray, never negative
    pub t: FloatType,
    pub point: WorldPoint,
    /// Outward surface normal, not flipped toward the ray
    pub normal: Unit<WorldVector>,
}

/// Renderable object
pub trait Object {
    /// Nearest intersection at non-negative distance along the ray, if any.
    fn intersect(&self, ray: &Ray) -> Option<HitRecord>;

    /// Places the object in world space. Applied once, before rendering.
    fn transform(&mut self, transform: &WorldTransform);
}

/// Everything the tracer reads. Not modified while rendering.
#[derive(Clone, Debug, Builder)]
pub struct Scene {
    /// Order decides ties between equally distant hits; earlier wins.
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    /// Log every traced ray through `LogObserver`.
    #[builder(default)]
    pub debug: bool,
}

impl Scene {
    /// Applies the transform to every primitive.
    pub fn transform(&mut self, transform: &WorldTransform) {
        for primitive in &mut self.primitives {
            primitive.transform(transform);
        }
    }
}
