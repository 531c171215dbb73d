//! Contact-sheet assembly of the 16-tile set

use crate::io::configuration::SHEET_COLUMNS;
use crate::render::tile::TileSet;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Assemble the tile set into one 4x4 contact sheet
///
/// Tiles are placed row-major by ascending neighbor code, so the tile
/// with code `k` lands at row `k / 4`, column `k % 4`. A raster whose
/// dimensions unexpectedly differ from the canonical tile size is
/// nearest-neighbor resized before placement rather than aborting the
/// run; table totality means no position can be empty.
pub fn assemble_sheet(tile_set: &TileSet) -> RgbaImage {
    let tile_size = tile_set.tile_size();
    let mut sheet = RgbaImage::new(tile_size * SHEET_COLUMNS, tile_size * SHEET_COLUMNS);

    for (code, raster) in tile_set.iter() {
        let (row, col) = code.sheet_position();
        let x = i64::from(col * tile_size);
        let y = i64::from(row * tile_size);

        if raster.dimensions() == (tile_size, tile_size) {
            imageops::replace(&mut sheet, raster, x, y);
        } else {
            let resized = imageops::resize(raster, tile_size, tile_size, FilterType::Nearest);
            imageops::replace(&mut sheet, &resized, x, y);
        }
    }

    sheet
}
