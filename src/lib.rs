mod camera;
pub mod geometry;
mod image_file_buffer;
pub mod renderer;
pub mod scene;
mod screen_block;
pub mod util;

pub use crate::renderer::{RenderProgress, RenderSettings, render, render_with_progress, trace};
pub use camera::{Camera, CameraError};
pub use image_file_buffer::{ImageFileBuffer, OutputError};
pub use scene::Scene;
pub use screen_block::{InternalPoints, ScreenBlock};
pub use util::Colour;
