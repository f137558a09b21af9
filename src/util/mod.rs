use crate::geometry::FloatType;

/// Additive colour. Components are not clamped; values outside 0-1 are the caller's business.
pub type Colour = rgb::RGB<FloatType>;

pub const BLACK: Colour = Colour {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

pub const WHITE: Colour = Colour {
    r: 1.0,
    g: 1.0,
    b: 1.0,
};

/// Component-wise product, used to filter light intensities by reflectance coefficients.
pub fn modulate(a: Colour, b: Colour) -> Colour {
    Colour::new(a.r * b.r, a.g * b.g, a.b * b.b)
}

/// Maps a 0-1 colour to pixel type compatible with module image.
pub fn color_to_image(color: Colour) -> image::Rgb<u8> {
    image::Rgb([
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b),
    ])
}

fn to_channel(value: FloatType) -> u8 {
    // NaN maps to 0 through the saturating cast
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    #[test]
    fn modulate_is_componentwise() {
        let c = modulate(Colour::new(0.5, 1.0, 0.0), Colour::new(0.5, 0.25, 1.0));
        assert!(c == Colour::new(0.25, 0.25, 0.0));
    }

    #[test]
    fn image_conversion_clamps() {
        let pixel = color_to_image(Colour::new(-1.0, 0.5, 7.0));
        assert!(pixel == image::Rgb([0, 128, 255]));
    }

    #[test]
    fn image_conversion_of_nan() {
        assert!(color_to_image(Colour::new(FloatType::NAN, 0.0, 1.0)) == image::Rgb([0, 0, 255]));
    }
}
