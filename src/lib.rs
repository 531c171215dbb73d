//! Deterministic procedural autotile boundary synthesis
//!
//! Given two base materials and an optional transition material, the
//! crate generates a complete 16-tile blob autotile set that blends the
//! two materials along every corner-adjacency pattern, plus a 4x4 contact
//! sheet, an engine rule resource, and a reproducibility manifest.
//! Identical inputs produce byte-identical output across runs and
//! platforms.

#![forbid(unsafe_code)]

/// Boundary geometry: points, polylines, line styles, signed distance
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Tile identities and the static recipe table
pub mod recipe;
/// Rasterization: classification, sampling, compositing, sheet assembly
pub mod render;

pub use io::error::{Result, SynthesisError};
pub use io::export::{synthesize_tile_set, RunSummary, TexturePaths};
