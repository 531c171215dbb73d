//! Per-tile rendering: classification grid to RGBA raster

use crate::geometry::point::Point;
use crate::io::configuration::Settings;
use crate::io::error::Result;
use crate::recipe::mask::NeighborCode;
use crate::recipe::table::{recipe_for, TileRecipe};
use crate::render::classify::{PixelClassification, TileField};
use crate::render::compositor::shade_pixel;
use crate::render::sampler::MaterialSet;
use image::RgbaImage;
use ndarray::Array2;

/// Classify every pixel center of a tile into a side/band grid
///
/// The grid is indexed `[row, col]` to match raster order. Fill fields
/// produce a uniform grid without ever touching distance math.
pub fn classify_tile(
    field: &TileField,
    tile_size: u32,
    half_band: f64,
) -> Array2<PixelClassification> {
    let n = tile_size as usize;
    Array2::from_shape_fn((n, n), |(row, col)| {
        field.classify(Point::new(col as f64, row as f64), half_band)
    })
}

/// Render one tile's recipe into an RGBA raster
///
/// Classification runs against the recipe's styled boundary; colors are
/// sampled and composited per the classification grid.
///
/// # Errors
///
/// Returns an error if the recipe's geometry is degenerate.
pub fn render_tile(
    recipe: &TileRecipe,
    materials: &MaterialSet,
    settings: &Settings,
) -> Result<RgbaImage> {
    let field = TileField::from_recipe(recipe, settings.tile_size, &settings.modulation)?;
    let half_band = f64::from(settings.band_width) / 2.0;
    let grid = classify_tile(&field, settings.tile_size, half_band);

    let mut raster = RgbaImage::new(settings.tile_size, settings.tile_size);
    for (x, y, pixel) in raster.enumerate_pixels_mut() {
        let classification = grid
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(PixelClassification::fill(
                crate::recipe::table::MaterialSide::A,
            ));
        *pixel = shade_pixel(classification, x, y, materials);
    }

    Ok(raster)
}

/// The 16 rendered tile rasters keyed by neighbor code
#[derive(Debug, Clone)]
pub struct TileSet {
    tile_size: u32,
    tiles: Vec<(NeighborCode, RgbaImage)>,
}

impl TileSet {
    /// Assemble a tile set from rendered rasters in ascending code order
    pub const fn new(tile_size: u32, tiles: Vec<(NeighborCode, RgbaImage)>) -> Self {
        Self { tile_size, tiles }
    }

    /// Canonical tile size in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The raster rendered for a code, if present
    pub fn get(&self, code: NeighborCode) -> Option<&RgbaImage> {
        self.tiles
            .iter()
            .find(|(tile_code, _)| *tile_code == code)
            .map(|(_, raster)| raster)
    }

    /// Iterate tiles in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (NeighborCode, &RgbaImage)> {
        self.tiles.iter().map(|(code, raster)| (*code, raster))
    }
}

/// Render the complete 16-tile set for the given materials and settings
///
/// Tiles are independent of one another; rendering order is ascending
/// code order purely for determinism of any interleaved output.
///
/// # Errors
///
/// Returns an error if any recipe's geometry is degenerate.
pub fn render_tile_set(materials: &MaterialSet, settings: &Settings) -> Result<TileSet> {
    let turn = settings.corner_style.corner_turn();
    let mut tiles = Vec::with_capacity(NeighborCode::COUNT);

    for code in NeighborCode::all() {
        let recipe = recipe_for(code, turn, settings.line_style);
        let raster = render_tile(&recipe, materials, settings)?;
        tiles.push((code, raster));
    }

    Ok(TileSet::new(settings.tile_size, tiles))
}
