//! Tile identities and the static recipe table
//!
//! A recipe is the complete geometric description of one tile: its
//! boundary anchors, corner-turn policy, line style, and the probe pixel
//! that fixes which side of the boundary is material A.

/// Neighbor-code identifiers and mask bit helpers
pub mod mask;
/// Recipe types and the total code-to-recipe mapping
pub mod table;

pub use mask::NeighborCode;
pub use table::{recipe_for, TileRecipe};
