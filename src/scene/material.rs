use std::{fmt, sync::Arc};

use bon::Builder;

use crate::{
    geometry::{FloatType, WorldPoint},
    util::Colour,
};

/// Diffuse reflectance, possibly varying over the surface.
#[derive(Clone)]
pub enum Diffuse {
    Uniform(Colour),
    /// Alternating 3D cells of size `scale`.
    Checker {
        even: Colour,
        odd: Colour,
        scale: FloatType,
    },
    Procedural(Arc<dyn Fn(&WorldPoint) -> Colour + Send + Sync>),
}

impl Diffuse {
    pub fn at(&self, point: &WorldPoint) -> Colour {
        match self {
            Diffuse::Uniform(colour) => *colour,
            Diffuse::Checker { even, odd, scale } => {
                let cell: FloatType = point.iter().map(|x| (x / scale).floor()).sum();
                if cell.rem_euclid(2.0) == 0.0 {
                    *even
                } else {
                    *odd
                }
            }
            Diffuse::Procedural(f) => f(point),
        }
    }
}

impl From<Colour> for Diffuse {
    fn from(value: Colour) -> Self {
        Diffuse::Uniform(value)
    }
}

impl fmt::Debug for Diffuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diffuse::Uniform(colour) => f.debug_tuple("Uniform").field(colour).finish(),
            Diffuse::Checker { even, odd, scale } => f
                .debug_struct("Checker")
                .field("even", even)
                .field("odd", odd)
                .field("scale", scale)
                .finish(),
            Diffuse::Procedural(_) => f.write_str("Procedural(..)"),
        }
    }
}

/// Phong surface description, shared read-only between primitives.
#[derive(Clone, Debug, Builder)]
pub struct Material {
    #[builder(default)]
    pub ambient: Colour,
    #[builder(into)]
    pub diffuse: Diffuse,
    #[builder(default)]
    pub specular: Colour,
    /// Specular exponent
    #[builder(default = 1.0)]
    pub shininess: FloatType,
    /// Attenuation of the mirror reflection colour, 0 for no reflection.
    #[builder(default)]
    pub reflection: FloatType,
}

impl Material {
    pub fn diffuse_at(&self, point: &WorldPoint) -> Colour {
        self.diffuse.at(point)
    }
}
