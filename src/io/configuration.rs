//! Synthesis constants and runtime settings

use crate::geometry::polyline::CornerTurn;
use crate::geometry::style::{LineStyle, StyleParams};
use crate::io::error::{invalid_parameter, Result};

/// Default generated tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Default transition band width in pixels
pub const DEFAULT_BAND_WIDTH: u32 = 4;

/// Default texture sampling scale factor
pub const DEFAULT_TEXTURE_SCALE: f64 = 1.0;

/// Default peak line-style displacement in pixels
pub const DEFAULT_AMPLITUDE: f64 = 2.0;

/// Default line-style waveform period in pixels of arc length
pub const DEFAULT_WAVELENGTH: f64 = 8.0;

/// Default craggy per-sample wobble in pixels
pub const DEFAULT_JITTER: f64 = 0.75;

/// Default craggy stair-step quantization grid in pixels
pub const DEFAULT_STAIR_STEP: f64 = 1.0;

/// Default palette name recorded in the manifest
pub const DEFAULT_PALETTE: &str = "default";

/// Columns (and rows) of the assembled contact sheet
pub const SHEET_COLUMNS: u32 = 4;

/// File-name stem shared by the sheet, rule resource, and manifest
pub const OUTPUT_STEM: &str = "coast16";

/// Directory-name prefix for the per-tile raster directory
pub const TILE_DIR_PREFIX: &str = "tiles_";

/// Schema tag written into the manifest
pub const MANIFEST_SCHEMA: &str = "coastile.tileset/1";

/// Corner routing style accepted at the settings surface
///
/// Only `Quarter` maps to rounded-turn routing; `Stepped` and `Square`
/// both map to beveled turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerStyle {
    /// Beveled turns (the default)
    Stepped,
    /// Rounded turns with shoulder vertices
    Quarter,
    /// Accepted for compatibility; behaves as beveled
    Square,
}

impl CornerStyle {
    /// The polyline corner-turn policy this style selects
    pub const fn corner_turn(self) -> CornerTurn {
        match self {
            Self::Quarter => CornerTurn::Rounded,
            Self::Stepped | Self::Square => CornerTurn::Beveled,
        }
    }

    /// Canonical settings-surface name of this style
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stepped => "stepped",
            Self::Quarter => "quarter",
            Self::Square => "square",
        }
    }
}

/// How the transition band is filled
///
/// Texture compositing is the only supported mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Composite the transition texture over the base sample
    #[default]
    Texture,
}

impl TransitionMode {
    /// Canonical settings-surface name of this mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Texture => "texture",
        }
    }
}

/// Complete settings surface for one synthesis run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Generated tile edge length in pixels
    pub tile_size: u32,
    /// Transition band width in pixels
    pub band_width: u32,
    /// Corner routing style
    pub corner_style: CornerStyle,
    /// Boundary line style
    pub line_style: LineStyle,
    /// Texture sampling scale factor
    pub texture_scale: f64,
    /// Transition band fill mode
    pub transition_mode: TransitionMode,
    /// Palette name passed through to the manifest
    pub palette_name: String,
    /// Line-style waveform parameters
    pub modulation: StyleParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            band_width: DEFAULT_BAND_WIDTH,
            corner_style: CornerStyle::Stepped,
            line_style: LineStyle::StraightLine,
            texture_scale: DEFAULT_TEXTURE_SCALE,
            transition_mode: TransitionMode::Texture,
            palette_name: DEFAULT_PALETTE.to_string(),
            modulation: StyleParams {
                amplitude: DEFAULT_AMPLITUDE,
                wavelength: DEFAULT_WAVELENGTH,
                jitter: DEFAULT_JITTER,
                stair_step: DEFAULT_STAIR_STEP,
            },
        }
    }
}

impl Settings {
    /// Validate the settings surface before a run
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error for a tile size below 2, a
    /// non-positive or non-finite texture scale, a non-positive
    /// wavelength, or negative amplitude, jitter, or stair step.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size < 2 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be at least 2",
            ));
        }
        if !self.texture_scale.is_finite() || self.texture_scale <= 0.0 {
            return Err(invalid_parameter(
                "texture_scale",
                &self.texture_scale,
                &"must be positive and finite",
            ));
        }
        if !self.modulation.wavelength.is_finite() || self.modulation.wavelength <= 0.0 {
            return Err(invalid_parameter(
                "wavelength",
                &self.modulation.wavelength,
                &"must be positive and finite",
            ));
        }
        if self.modulation.amplitude < 0.0 {
            return Err(invalid_parameter(
                "amplitude",
                &self.modulation.amplitude,
                &"must be non-negative",
            ));
        }
        if self.modulation.jitter < 0.0 {
            return Err(invalid_parameter(
                "jitter",
                &self.modulation.jitter,
                &"must be non-negative",
            ));
        }
        if self.modulation.stair_step < 0.0 {
            return Err(invalid_parameter(
                "stair_step",
                &self.modulation.stair_step,
                &"must be non-negative",
            ));
        }
        Ok(())
    }

    /// Directory name holding the per-tile rasters, e.g. `"tiles_32"`
    pub fn tile_dir_name(&self) -> String {
        format!("{TILE_DIR_PREFIX}{}", self.tile_size)
    }

    /// Sheet file name, e.g. `"coast16_32.png"`
    pub fn sheet_file_name(&self) -> String {
        format!("{OUTPUT_STEM}_{}.png", self.tile_size)
    }

    /// Rule resource file name, e.g. `"coast16_32.tres"`
    pub fn rules_file_name(&self) -> String {
        format!("{OUTPUT_STEM}_{}.tres", self.tile_size)
    }

    /// Manifest file name
    pub fn manifest_file_name(&self) -> String {
        format!("{OUTPUT_STEM}_manifest.json")
    }
}
