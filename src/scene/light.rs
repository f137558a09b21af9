use crate::{geometry::WorldPoint, util::Colour};

/// Point light with separate intensities for the three Phong terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: WorldPoint,
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
}

impl Light {
    pub fn new(position: WorldPoint, ambient: Colour, diffuse: Colour, specular: Colour) -> Self {
        Light {
            position,
            ambient,
            diffuse,
            specular,
        }
    }
}
