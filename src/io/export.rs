//! Run orchestration: render, assemble, and write all run artifacts
//!
//! A run is all-or-nothing: the 16 tile rasters, the contact sheet, the
//! engine rule resource, and the manifest are either all written or the
//! run fails as a whole. There is no supported partial-sheet state.

use crate::io::configuration::Settings;
use crate::io::error::{Result, SynthesisError};
use crate::io::manifest::{build_manifest, write_manifest};
use crate::io::progress::ProgressManager;
use crate::io::rules::write_rules;
use crate::recipe::mask::NeighborCode;
use crate::recipe::table::recipe_for;
use crate::render::sampler::MaterialSet;
use crate::render::sheet::assemble_sheet;
use crate::render::tile::{render_tile, TileSet};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Source texture paths for one run; any may be absent
#[derive(Debug, Clone, Default)]
pub struct TexturePaths {
    /// Primary material texture
    pub material_a: Option<PathBuf>,
    /// Secondary material texture
    pub material_b: Option<PathBuf>,
    /// Transition-band texture
    pub transition: Option<PathBuf>,
}

impl TexturePaths {
    /// Load the material set these paths name
    ///
    /// Missing or undecodable textures degrade to transparent sampling.
    pub fn load(&self, scale: f64) -> MaterialSet {
        MaterialSet::load(
            self.material_a.as_deref(),
            self.material_b.as_deref(),
            self.transition.as_deref(),
            scale,
        )
    }
}

/// Paths of every artifact a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The 16 tile raster files in ascending code order
    pub tile_files: Vec<PathBuf>,
    /// The assembled contact sheet
    pub sheet_file: PathBuf,
    /// The engine rule resource
    pub rules_file: PathBuf,
    /// The run manifest
    pub manifest_file: PathBuf,
}

/// Synthesize a complete tile set and write all artifacts
///
/// Convenience wrapper over
/// [`synthesize_tile_set_with_progress`] with progress reporting
/// disabled, for library callers.
///
/// # Errors
///
/// Returns an error on invalid settings, degenerate recipe geometry, or
/// any file system or image encoding failure.
pub fn synthesize_tile_set(
    output_dir: &Path,
    textures: &TexturePaths,
    settings: &Settings,
) -> Result<RunSummary> {
    synthesize_tile_set_with_progress(output_dir, textures, settings, &ProgressManager::disabled())
}

/// Synthesize a complete tile set, reporting per-step progress
///
/// # Errors
///
/// Returns an error on invalid settings, degenerate recipe geometry, or
/// any file system or image encoding failure.
pub fn synthesize_tile_set_with_progress(
    output_dir: &Path,
    textures: &TexturePaths,
    settings: &Settings,
    progress: &ProgressManager,
) -> Result<RunSummary> {
    settings.validate()?;

    let tile_dir = output_dir.join(settings.tile_dir_name());
    create_dir(&tile_dir)?;

    let materials = textures.load(settings.texture_scale);
    let turn = settings.corner_style.corner_turn();

    let mut tiles = Vec::with_capacity(NeighborCode::COUNT);
    let mut tile_files = Vec::with_capacity(NeighborCode::COUNT);

    for code in NeighborCode::all() {
        let recipe = recipe_for(code, turn, settings.line_style);
        let raster = render_tile(&recipe, &materials, settings)?;

        let path = tile_dir.join(format!("{}.png", code.file_stem(settings.tile_size)));
        save_raster(&raster, &path)?;
        progress.advance(recipe.name);

        tile_files.push(path);
        tiles.push((code, raster));
    }

    let tile_set = TileSet::new(settings.tile_size, tiles);
    let sheet = assemble_sheet(&tile_set);
    let sheet_file = output_dir.join(settings.sheet_file_name());
    save_raster(&sheet, &sheet_file)?;
    progress.advance("sheet");

    let rules_file = output_dir.join(settings.rules_file_name());
    write_rules(&rules_file, settings)?;
    progress.advance("rules");

    let manifest_file = output_dir.join(settings.manifest_file_name());
    write_manifest(&manifest_file, &build_manifest(settings, textures))?;
    progress.advance("manifest");
    progress.finish();

    Ok(RunSummary {
        tile_files,
        sheet_file,
        rules_file,
        manifest_file,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| SynthesisError::FileSystem {
        path: path.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

fn save_raster(raster: &RgbaImage, path: &Path) -> Result<()> {
    raster.save(path).map_err(|e| SynthesisError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
