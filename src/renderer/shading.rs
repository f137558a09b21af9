use nalgebra::Unit;
use ordered_float::OrderedFloat;

use crate::{
    geometry::{EPSILON, FloatType, Ray, WorldPoint, WorldVector},
    scene::{Material, Object, Scene},
    util::{BLACK, Colour, modulate},
};

/// Fraction of the way toward the light the shadow ray starts at.
pub const SHADOW_BIAS: FloatType = 0.1;

/// True if a primitive blocks the segment between `from` and the light.
///
/// Hits at distance zero don't count, a hit exactly at the light does.
/// Callers are expected to move `from` off the surface they are shading first.
pub fn is_occluded(scene: &Scene, from: &WorldPoint, light_position: &WorldPoint) -> bool {
    let to_light = light_position - from;
    let light_distance = to_light.norm();
    let Some(ray) = Ray::try_new(*from, to_light) else {
        return false;
    };

    let nearest = scene
        .primitives
        .iter()
        .filter_map(|primitive| primitive.intersect(&ray))
        .map(|hit| OrderedFloat(hit.t))
        .min();

    match nearest {
        Some(OrderedFloat(t)) => t > 0.0 && t <= light_distance,
        None => false,
    }
}

/// Phong illumination at `point` summed over all lights.
///
/// `normal` must already face the viewer, `view` is the direction of the incoming ray.
/// Ambient light is added even for lights that are shadowed.
pub fn shade(
    scene: &Scene,
    point: &WorldPoint,
    normal: &Unit<WorldVector>,
    view: &Unit<WorldVector>,
    material: &Material,
) -> Colour {
    let mut colour = BLACK;

    for light in &scene.lights {
        colour += modulate(material.ambient, light.ambient);

        let shadow_origin = point + (light.position - point) * SHADOW_BIAS;
        if is_occluded(scene, &shadow_origin, &light.position) {
            continue;
        }

        let Some(l) = Unit::try_new(light.position - point, EPSILON) else {
            continue;
        };
        let n = normal.as_ref();
        let r = -l.as_ref() + n * (2.0 * l.dot(n));

        let diffuse = n.dot(l.as_ref()).max(0.0);
        colour += modulate(material.diffuse_at(point), light.diffuse) * diffuse;

        let specular = r.dot(&-view.as_ref()).max(0.0).powf(material.shininess);
        colour += modulate(material.specular, light.specular) * specular;
    }

    colour
}
