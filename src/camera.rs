use bon::bon;
use nalgebra::Unit;
use thiserror::Error;

use crate::{
    geometry::{EPSILON, FloatType, Ray, ScreenPoint, ScreenSize, WorldPoint, WorldVector},
    scene::Quad,
};

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("Resolution must be non-zero, got {0}x{1}")]
    ZeroResolution(u32, u32),

    #[error("Film width and focal length must be positive")]
    NonPositiveFilm,

    #[error("`up` and `forward` must be non-zero and linearly independent")]
    DegenerateBasis,
}

/// Pinhole camera shooting rays from `position` through an image plane quad.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: WorldPoint,
    resolution: ScreenSize,
    image_plane: Quad,
}

#[bon]
impl Camera {
    /// Builds the image plane from a viewing direction.
    ///
    /// The film sits `focal_length` in front of `center`, is `film_width` wide and keeps
    /// the aspect ratio of `resolution`. Pixel (0, 0) is the top left corner.
    #[builder]
    pub fn new(
        center: WorldPoint,
        forward: WorldVector,
        up: WorldVector,
        resolution: ScreenSize,
        film_width: FloatType,
        focal_length: FloatType,
    ) -> Result<Self, CameraError> {
        if !(film_width > 0.0 && focal_length > 0.0) {
            return Err(CameraError::NonPositiveFilm);
        }

        let forward = Unit::try_new(forward, EPSILON).ok_or(CameraError::DegenerateBasis)?;
        let right = Unit::try_new(forward.cross(&up), EPSILON).ok_or(CameraError::DegenerateBasis)?;
        let up = Unit::new_normalize(right.cross(forward.as_ref()));

        let film_height = film_width * resolution.y as FloatType / resolution.x as FloatType;
        let across = right.as_ref() * film_width;
        let down = -up.as_ref() * film_height;

        let top_left = center + forward.as_ref() * focal_length - across / 2.0 - down / 2.0;
        // Rows advance away from the second corner, so it sits one film height above.
        let above = top_left - down;
        let image_plane = Quad::new(top_left, above, above + across, top_left + across);

        Self::with_image_plane(center, image_plane, resolution)
    }
}

impl Camera {
    pub fn with_image_plane(
        position: WorldPoint,
        image_plane: Quad,
        resolution: ScreenSize,
    ) -> Result<Self, CameraError> {
        if resolution.x == 0 || resolution.y == 0 {
            return Err(CameraError::ZeroResolution(resolution.x, resolution.y));
        }
        Ok(Camera {
            position,
            resolution,
            image_plane,
        })
    }

    pub fn position(&self) -> WorldPoint {
        self.position
    }

    pub fn get_resolution(&self) -> ScreenSize {
        self.resolution
    }

    pub fn pixel_to_world(&self, point: &ScreenPoint) -> WorldPoint {
        self.image_plane.pixel_to_world(*point, self.resolution)
    }

    /// Ray from the camera through the given pixel.
    /// `None` if the pixel maps onto the camera position itself.
    pub fn primary_ray(&self, point: &ScreenPoint) -> Option<Ray> {
        Ray::try_new(self.position, self.pixel_to_world(point) - self.position)
    }
}
