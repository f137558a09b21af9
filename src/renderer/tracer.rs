use nalgebra::Unit;
use ordered_float::OrderedFloat;

use crate::{
    geometry::{FloatType, Ray, WorldPoint, WorldVector},
    scene::{Object, Primitive, Scene},
    util::{BLACK, Colour},
};

use super::{
    observer::{LogObserver, NoopObserver, TraceObserver},
    shading,
};

/// Deepest reflection bounce that still gets traced; the primary ray has depth 1.
pub const MAX_DEPTH: u32 = 5;

/// Distance the hit point is pushed along the normal before spawning reflected rays.
pub const REFLECTION_OFFSET: FloatType = 0.001;

/// Nearest intersection of a ray with the whole scene.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceHit<'a> {
    pub t: FloatType,
    pub point: WorldPoint,
    /// Surface normal, flipped to face against the ray
    pub normal: Unit<WorldVector>,
    pub primitive: &'a Primitive,
}

/// Traces a ray from `origin` and returns its colour, or `None` if it hits nothing.
///
/// `depth` counts bounces, starting at 1 for primary rays; rays deeper than `MAX_DEPTH`
/// are not traced at all. Scenes with the `debug` flag log every ray.
pub fn trace(
    origin: WorldPoint,
    direction: WorldVector,
    scene: &Scene,
    depth: u32,
) -> Option<Colour> {
    let ray = Ray::try_new(origin, direction)?;
    if scene.debug {
        Tracer::new(scene, MAX_DEPTH, LogObserver).trace(&ray, depth)
    } else {
        Tracer::new(scene, MAX_DEPTH, NoopObserver).trace(&ray, depth)
    }
}

/// Whitted-style recursive tracer over a read-only scene.
pub struct Tracer<'a, O: TraceObserver> {
    scene: &'a Scene,
    max_depth: u32,
    observer: O,
}

impl<'a, O: TraceObserver> Tracer<'a, O> {
    pub fn new(scene: &'a Scene, max_depth: u32, observer: O) -> Self {
        Tracer {
            scene,
            max_depth,
            observer,
        }
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Local illumination at the nearest hit plus the attenuated mirror reflection.
    pub fn trace(&mut self, ray: &Ray, depth: u32) -> Option<Colour> {
        if depth > self.max_depth {
            return None;
        }

        self.observer.before_intersection(ray, depth);
        let hit = self.nearest_hit(ray);
        self.observer.after_intersection(ray, hit.as_ref(), depth);
        let hit = hit?;

        let material = &hit.primitive.material;
        let mut colour = shading::shade(
            self.scene,
            &hit.point,
            &hit.normal,
            &ray.direction,
            material,
        );

        let offset_point = hit.point + hit.normal.as_ref() * REFLECTION_OFFSET;
        let n = hit.normal.as_ref();
        let reflected_direction =
            ray.direction.as_ref() + n * (2.0 * n.dot(&-ray.direction.as_ref()));
        let reflected = Ray::new(offset_point, reflected_direction);

        self.observer.before_reflection(&reflected, depth + 1);
        let reflection = self.trace(&reflected, depth + 1);
        self.observer.after_reflection(reflection.as_ref(), depth + 1);

        colour += reflection.unwrap_or(BLACK) * material.reflection;

        Some(colour)
    }

    /// Closest hit at non-negative distance; ties go to the primitive listed first.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<SurfaceHit<'a>> {
        let scene: &'a Scene = self.scene;
        let (primitive, record) = scene
            .primitives
            .iter()
            .filter_map(|primitive| Some((primitive, primitive.intersect(ray)?)))
            .min_by_key(|(_, record)| OrderedFloat(record.t))?;

        let normal = if record.normal.dot(ray.direction.as_ref()) >= 0.0 {
            Unit::new_unchecked(-record.normal.into_inner())
        } else {
            record.normal
        };

        Some(SurfaceHit {
            t: record.t,
            point: record.point,
            normal,
            primitive,
        })
    }
}
