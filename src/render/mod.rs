//! Rasterization pipeline from recipes to tile and sheet rasters
//!
//! This module contains the signed-distance classification, texture
//! sampling, compositing, and sheet-assembly halves of the pipeline.

/// Per-pixel material classification against boundary fields
pub mod classify;
/// Color sampling and straight-alpha compositing
pub mod compositor;
/// Texture samplers with toroidal wrapping
pub mod sampler;
/// Contact-sheet assembly
pub mod sheet;
/// Per-tile rendering and the tile-set container
pub mod tile;

pub use sampler::MaterialSet;
pub use tile::{render_tile_set, TileSet};
