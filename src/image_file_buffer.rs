use std::path::Path;

use image::RgbImage;
use thiserror::Error;

use crate::{
    geometry::ScreenSize,
    util::{Colour, color_to_image},
};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Expected {expected} pixels for the image, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Save(#[from] image::ImageError),
}

/// 8-bit image built from a rendered frame, that can only save its content to file.
pub struct ImageFileBuffer {
    img: RgbImage,
}

impl ImageFileBuffer {
    /// Clamps a frame of colours (indexed `x + y * width`) into an 8-bit image.
    pub fn from_colours(size: ScreenSize, colours: &[Colour]) -> Result<Self, OutputError> {
        let expected = size.x as usize * size.y as usize;
        if colours.len() != expected {
            return Err(OutputError::SizeMismatch {
                expected,
                actual: colours.len(),
            });
        }

        let img = RgbImage::from_fn(size.x, size.y, |x, y| {
            color_to_image(colours[x as usize + y as usize * size.x as usize])
        });
        Ok(ImageFileBuffer { img })
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    /// Writes the image; format is chosen by the file extension.
    pub fn save(&self, path: &Path) -> Result<(), OutputError> {
        self.img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{BLACK, WHITE};
    use assert2::{assert, let_assert};

    #[test]
    fn pixels_follow_row_major_order() {
        let colours = [
            BLACK,
            WHITE,
            Colour::new(1.0, 0.0, 0.0),
            Colour::new(0.0, 0.0, 2.0),
            Colour::new(-1.0, 0.5, 0.0),
            BLACK,
        ];
        let buffer = ImageFileBuffer::from_colours(ScreenSize::new(3, 2), &colours)
            .expect("sizes match");

        let img = buffer.image();
        assert!(img.dimensions() == (3, 2));
        assert!(img.get_pixel(1, 0).0 == [255, 255, 255]);
        assert!(img.get_pixel(2, 0).0 == [255, 0, 0]);
        assert!(img.get_pixel(0, 1).0 == [0, 0, 255]);
        assert!(img.get_pixel(1, 1).0 == [0, 128, 0]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let result = ImageFileBuffer::from_colours(ScreenSize::new(3, 2), &[BLACK; 5]);
        let_assert!(Err(OutputError::SizeMismatch { expected, actual }) = result);
        assert!(expected == 6);
        assert!(actual == 5);
    }
}
