//! Run manifest describing every artifact needed to reproduce a run

use crate::io::configuration::{Settings, MANIFEST_SCHEMA, SHEET_COLUMNS};
use crate::io::error::{Result, SynthesisError};
use crate::io::export::TexturePaths;
use crate::recipe::mask::NeighborCode;
use crate::recipe::table::recipe_for;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level manifest written alongside the generated tile set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSetManifest {
    /// Manifest schema tag
    pub schema: String,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Sheet columns
    pub columns: u32,
    /// Sheet rows
    pub rows: u32,
    /// Palette name passed through from the settings
    pub palette: String,
    /// Sheet file name relative to the manifest
    pub sheet: String,
    /// Rule resource file name relative to the manifest
    pub rules: String,
    /// Per-tile records in ascending code order
    pub tiles: Vec<TileEntry>,
    /// Settings echo sufficient to reproduce the run
    pub settings: SettingsEcho,
    /// Source texture paths used by the run
    pub textures: TextureEcho,
}

/// One tile's identity and raster location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileEntry {
    /// Neighbor code
    pub id: u8,
    /// Human-readable tile name
    pub name: String,
    /// The code as a 4-bit binary string
    pub mask: String,
    /// Raster file path relative to the manifest
    pub file: String,
}

/// Settings echo recorded for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsEcho {
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Transition band width in pixels
    pub band_width: u32,
    /// Corner routing style name
    pub corner_style: String,
    /// Line style name
    pub line_style: String,
    /// Texture sampling scale factor
    pub texture_scale: f64,
    /// Transition fill mode name
    pub transition_mode: String,
    /// Line-style amplitude in pixels
    pub amplitude: f64,
    /// Line-style wavelength in pixels
    pub wavelength: f64,
    /// Craggy jitter in pixels
    pub jitter: f64,
    /// Craggy stair step in pixels
    pub stair_step: f64,
}

/// Source texture paths echoed into the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureEcho {
    /// Primary material texture path
    pub material_a: Option<String>,
    /// Secondary material texture path
    pub material_b: Option<String>,
    /// Transition texture path
    pub transition: Option<String>,
}

/// Build the manifest for a run
///
/// Tile entries are derived from the recipe table in ascending code
/// order, so the manifest is total over the 16-tile set by construction.
pub fn build_manifest(settings: &Settings, textures: &TexturePaths) -> TileSetManifest {
    let turn = settings.corner_style.corner_turn();
    let tile_dir = settings.tile_dir_name();

    let tiles = NeighborCode::all()
        .map(|code| {
            let recipe = recipe_for(code, turn, settings.line_style);
            TileEntry {
                id: code.value(),
                name: recipe.name.to_string(),
                mask: code.binary_label(),
                file: format!("{tile_dir}/{}.png", code.file_stem(settings.tile_size)),
            }
        })
        .collect();

    TileSetManifest {
        schema: MANIFEST_SCHEMA.to_string(),
        tile_size: settings.tile_size,
        columns: SHEET_COLUMNS,
        rows: SHEET_COLUMNS,
        palette: settings.palette_name.clone(),
        sheet: settings.sheet_file_name(),
        rules: settings.rules_file_name(),
        tiles,
        settings: SettingsEcho {
            tile_size: settings.tile_size,
            band_width: settings.band_width,
            corner_style: settings.corner_style.as_str().to_string(),
            line_style: settings.line_style.as_str().to_string(),
            texture_scale: settings.texture_scale,
            transition_mode: settings.transition_mode.as_str().to_string(),
            amplitude: settings.modulation.amplitude,
            wavelength: settings.modulation.wavelength,
            jitter: settings.modulation.jitter,
            stair_step: settings.modulation.stair_step,
        },
        textures: TextureEcho {
            material_a: textures.material_a.as_ref().map(display_path),
            material_b: textures.material_b.as_ref().map(display_path),
            transition: textures.transition.as_ref().map(display_path),
        },
    }
}

fn display_path(path: impl AsRef<Path>) -> String {
    path.as_ref().display().to_string()
}

/// Serialize and write the manifest as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if JSON encoding or the file write fails.
pub fn write_manifest(path: &Path, manifest: &TileSetManifest) -> Result<()> {
    let mut encoded = serde_json::to_string_pretty(manifest)?;
    encoded.push('\n');

    std::fs::write(path, encoded).map_err(|e| SynthesisError::FileSystem {
        path: path.to_path_buf(),
        operation: "write manifest",
        source: e,
    })
}
