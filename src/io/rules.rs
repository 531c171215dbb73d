//! Engine tile-rule resource export
//!
//! Writes a Godot 4 `TileSet` text resource binding each neighbor code to
//! its sheet position, with per-corner terrain peering bits derived from
//! the code's 4-bit mask. The format beyond the position-to-code binding
//! is engine-specific and opaque to the synthesis core.

use crate::io::configuration::Settings;
use crate::io::error::{Result, SynthesisError};
use crate::recipe::mask::{self, NeighborCode};
use std::path::Path;

/// Terrain index the engine uses for material A
const TERRAIN_A: u8 = 0;
/// Terrain index the engine uses for material B
const TERRAIN_B: u8 = 1;

// (mask bit, engine peering-bit name) in engine declaration order
const CORNER_PEERING: [(u8, &str); 4] = [
    (mask::CORNER_NW, "top_left_corner"),
    (mask::CORNER_NE, "top_right_corner"),
    (mask::CORNER_SE, "bottom_right_corner"),
    (mask::CORNER_SW, "bottom_left_corner"),
];

/// Center terrain recorded for a tile
///
/// Every tile except the all-B fill contains material A.
const fn center_terrain(code: NeighborCode) -> u8 {
    if code.value() == 15 { TERRAIN_B } else { TERRAIN_A }
}

/// Render the rule resource text for a run
///
/// Each of the 16 codes yields exactly one addressable atlas position
/// (`col:row`), which is the only contract the synthesis core guarantees
/// to the engine.
pub fn render_rules(settings: &Settings) -> String {
    let tile_size = settings.tile_size;
    let sheet = settings.sheet_file_name();
    let mut out = String::new();

    out.push_str("[gd_resource type=\"TileSet\" load_steps=3 format=3]\n\n");
    out.push_str(&format!(
        "[ext_resource type=\"Texture2D\" path=\"{sheet}\" id=\"1\"]\n\n"
    ));
    out.push_str("[sub_resource type=\"TileSetAtlasSource\" id=\"2\"]\n");
    out.push_str("texture = ExtResource(\"1\")\n");
    out.push_str(&format!(
        "texture_region_size = Vector2i({tile_size}, {tile_size})\n"
    ));

    for code in NeighborCode::all() {
        let (row, col) = code.sheet_position();
        out.push_str(&format!("{col}:{row}/0 = 0\n"));
        out.push_str(&format!("{col}:{row}/0/terrain_set = 0\n"));
        out.push_str(&format!(
            "{col}:{row}/0/terrain = {}\n",
            center_terrain(code)
        ));
        for (bit, name) in CORNER_PEERING {
            let terrain = if code.has_corner(bit) {
                TERRAIN_A
            } else {
                TERRAIN_B
            };
            out.push_str(&format!(
                "{col}:{row}/0/terrains_peering_bit/{name} = {terrain}\n"
            ));
        }
    }

    out.push_str("\n[resource]\n");
    out.push_str(&format!("tile_size = Vector2i({tile_size}, {tile_size})\n"));
    out.push_str("terrain_set_0/mode = 1\n");
    out.push_str("terrain_set_0/terrain_0/name = \"material_a\"\n");
    out.push_str("terrain_set_0/terrain_0/color = Color(0.3, 0.6, 0.3, 1)\n");
    out.push_str("terrain_set_0/terrain_1/name = \"material_b\"\n");
    out.push_str("terrain_set_0/terrain_1/color = Color(0.3, 0.4, 0.7, 1)\n");
    out.push_str("sources/0 = SubResource(\"2\")\n");

    out
}

/// Write the rule resource for a run
///
/// # Errors
///
/// Returns an error if the file write fails.
pub fn write_rules(path: &Path, settings: &Settings) -> Result<()> {
    std::fs::write(path, render_rules(settings)).map_err(|e| SynthesisError::FileSystem {
        path: path.to_path_buf(),
        operation: "write rule resource",
        source: e,
    })
}
