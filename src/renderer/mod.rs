mod observer;
mod shading;
mod tracer;

use std::time::Instant;

use log::info;

use crate::{
    scene::Scene,
    screen_block::ScreenBlock,
    util::{BLACK, Colour},
};

pub use observer::{LogObserver, NoopObserver, TraceObserver};
pub use shading::{SHADOW_BIAS, is_occluded, shade};
pub use tracer::{MAX_DEPTH, REFLECTION_OFFSET, SurfaceHit, Tracer, trace};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Deepest traced bounce, primary rays are depth 1
    pub max_depth: u32,
    /// Colour of pixels whose primary ray hits nothing
    pub background: Colour,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            max_depth: MAX_DEPTH,
            background: BLACK,
        }
    }
}

/// Number of finished and total rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderProgress {
    pub finished: usize,
    pub total: usize,
}

/// Renders the scene with default settings.
///
/// Returns one unclamped colour per pixel, indexed `x + y * width`.
pub fn render(scene: &Scene) -> Vec<Colour> {
    render_with_progress(scene, &RenderSettings::default(), |_| {})
}

/// Renders the scene, calling `progress_callback` after every finished row.
pub fn render_with_progress<F: FnMut(RenderProgress)>(
    scene: &Scene,
    settings: &RenderSettings,
    progress_callback: F,
) -> Vec<Colour> {
    if scene.debug {
        render_frame(
            scene,
            settings,
            Tracer::new(scene, settings.max_depth, LogObserver),
            progress_callback,
        )
    } else {
        render_frame(
            scene,
            settings,
            Tracer::new(scene, settings.max_depth, NoopObserver),
            progress_callback,
        )
    }
}

fn render_frame<O: TraceObserver, F: FnMut(RenderProgress)>(
    scene: &Scene,
    settings: &RenderSettings,
    mut tracer: Tracer<'_, O>,
    mut progress_callback: F,
) -> Vec<Colour> {
    let camera = &scene.camera;
    let resolution = camera.get_resolution();
    let frame = ScreenBlock::from_size(resolution);

    info!(
        "Rendering {}x{} frame from {:?}: {} primitives, {} lights",
        resolution.x,
        resolution.y,
        camera.position(),
        scene.primitives.len(),
        scene.lights.len()
    );
    let start = Instant::now();

    let mut buffer = Vec::with_capacity(frame.area());
    let rows = frame.rows();
    let total = rows.len();

    for (index, row) in rows.enumerate() {
        buffer.extend(row.internal_points().map(|point| {
            camera
                .primary_ray(&point)
                .and_then(|ray| tracer.trace(&ray, 1))
                .unwrap_or(settings.background)
        }));

        log::trace!("Row {} done", row.min.y);
        progress_callback(RenderProgress {
            finished: index + 1,
            total,
        });
    }

    debug_assert!(buffer.len() == frame.area());
    info!("Frame finished in {:.2?}", start.elapsed());

    buffer
}
