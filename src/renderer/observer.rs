use log::debug;

use crate::{geometry::Ray, util::Colour};

use super::tracer::SurfaceHit;

/// Hook points of the recursive tracer, for diagnostics.
/// All methods default to doing nothing.
pub trait TraceObserver {
    fn before_intersection(&mut self, _ray: &Ray, _depth: u32) {}

    fn after_intersection(&mut self, _ray: &Ray, _hit: Option<&SurfaceHit<'_>>, _depth: u32) {}

    /// Called before following the mirror reflection; `depth` is the depth of the new ray.
    fn before_reflection(&mut self, _reflected: &Ray, _depth: u32) {}

    fn after_reflection(&mut self, _colour: Option<&Colour>, _depth: u32) {}
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}

/// Writes every traced ray to the `log` facade at debug level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl TraceObserver for LogObserver {
    fn before_intersection(&mut self, ray: &Ray, depth: u32) {
        debug!(target: "trace", "trace {depth}: origin {:?} direction {:?}", ray.origin, ray.direction);
    }

    fn after_intersection(&mut self, _ray: &Ray, hit: Option<&SurfaceHit<'_>>, depth: u32) {
        match hit {
            Some(hit) => debug!(
                target: "trace",
                "hit {depth}: {} at {:?}, normal {:?}",
                hit.primitive.shape.name(),
                hit.point,
                hit.normal
            ),
            None => debug!(target: "trace", "miss {depth}"),
        }
    }

    fn before_reflection(&mut self, reflected: &Ray, depth: u32) {
        debug!(target: "trace", "reflect {depth}: direction {:?}", reflected.direction);
    }

    fn after_reflection(&mut self, colour: Option<&Colour>, depth: u32) {
        debug!(target: "trace", "reflected {depth}: {colour:?}");
    }
}
