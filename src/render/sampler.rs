//! Wrapped, scaled point sampling of source material textures
//!
//! A sampler missing its backing raster degrades to fully-transparent
//! sampling instead of failing, so art-in-progress with partial textures
//! still renders a complete tile set.

use crate::recipe::table::MaterialSide;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Fully transparent pixel returned for absent textures
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Point sampler over one optional source raster
///
/// Sampling wraps toroidally per axis after applying the scale factor:
/// `coord = floor((coord * scale) mod dimension)`.
#[derive(Debug, Clone)]
pub struct TextureSampler {
    image: Option<RgbaImage>,
    scale: f64,
}

impl TextureSampler {
    /// Create a sampler over an in-memory raster
    pub const fn from_image(image: RgbaImage, scale: f64) -> Self {
        Self {
            image: Some(image),
            scale,
        }
    }

    /// Create a sampler with no backing raster
    ///
    /// Every sample returns fully transparent.
    pub const fn absent() -> Self {
        Self {
            image: None,
            scale: 1.0,
        }
    }

    /// Load a sampler from an optional texture path
    ///
    /// A missing path, or a path that fails to decode, degrades to an
    /// absent sampler with a notice on stderr; texture loading is never
    /// fatal to a run.
    // Allow print for user feedback on degraded texture loading
    #[allow(clippy::print_stderr)]
    pub fn load(path: Option<&Path>, scale: f64) -> Self {
        let Some(path) = path else {
            return Self::absent();
        };

        match image::open(path) {
            Ok(image) => Self::from_image(image.to_rgba8(), scale),
            Err(error) => {
                eprintln!(
                    "Could not load texture '{}': {error} (sampling transparent)",
                    path.display()
                );
                Self::absent()
            }
        }
    }

    /// Whether a backing raster is present
    pub const fn is_present(&self) -> bool {
        self.image.is_some()
    }

    /// Sample the texture at a tile pixel coordinate
    ///
    /// Coordinates are scaled, wrapped toroidally per axis, and floored
    /// to a texel. Absent textures sample fully transparent.
    pub fn sample(&self, x: u32, y: u32) -> Rgba<u8> {
        let Some(image) = &self.image else {
            return TRANSPARENT;
        };

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return TRANSPARENT;
        }

        let tx = (f64::from(x) * self.scale).rem_euclid(f64::from(width)).floor() as u32;
        let ty = (f64::from(y) * self.scale).rem_euclid(f64::from(height)).floor() as u32;
        *image.get_pixel(tx.min(width - 1), ty.min(height - 1))
    }
}

/// The up-to-three source textures of a run
#[derive(Debug, Clone)]
pub struct MaterialSet {
    /// Primary material texture
    pub material_a: TextureSampler,
    /// Secondary material texture
    pub material_b: TextureSampler,
    /// Optional transition-band texture composited over the base sample
    pub transition: Option<TextureSampler>,
}

impl MaterialSet {
    /// Load all configured textures at a shared scale factor
    pub fn load(
        material_a: Option<&Path>,
        material_b: Option<&Path>,
        transition: Option<&Path>,
        scale: f64,
    ) -> Self {
        Self {
            material_a: TextureSampler::load(material_a, scale),
            material_b: TextureSampler::load(material_b, scale),
            transition: transition.map(|path| TextureSampler::load(Some(path), scale)),
        }
    }

    /// The sampler backing a material side
    pub const fn side_sampler(&self, side: MaterialSide) -> &TextureSampler {
        match side {
            MaterialSide::A => &self.material_a,
            MaterialSide::B => &self.material_b,
        }
    }
}
