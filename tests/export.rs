//! Validates end-to-end artifact export: files, sheet layout, manifest,
//! rules, and byte-identical determinism

use coastile::geometry::style::LineStyle;
use coastile::io::configuration::Settings;
use coastile::io::manifest::TileSetManifest;
use coastile::recipe::mask::NeighborCode;
use coastile::render::sampler::{MaterialSet, TextureSampler};
use coastile::render::sheet::assemble_sheet;
use coastile::render::tile::{render_tile_set, TileSet};
use coastile::{synthesize_tile_set, TexturePaths};
use image::{Rgba, RgbaImage};
use std::path::Path;

const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn write_texture(dir: &Path, name: &str, color: Rgba<u8>) -> std::path::PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(64, 64, color)
        .save(&path)
        .expect("texture saves");
    path
}

fn texture_paths(dir: &Path) -> TexturePaths {
    TexturePaths {
        material_a: Some(write_texture(dir, "a.png", GREEN)),
        material_b: Some(write_texture(dir, "b.png", BLUE)),
        transition: Some(write_texture(dir, "t.png", RED)),
    }
}

fn in_memory_materials() -> MaterialSet {
    MaterialSet {
        material_a: TextureSampler::from_image(RgbaImage::from_pixel(64, 64, GREEN), 1.0),
        material_b: TextureSampler::from_image(RgbaImage::from_pixel(64, 64, BLUE), 1.0),
        transition: None,
    }
}

#[test]
fn test_run_writes_every_expected_artifact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let textures = texture_paths(dir.path());
    let settings = Settings::default();

    let summary =
        synthesize_tile_set(dir.path(), &textures, &settings).expect("run succeeds");

    assert_eq!(summary.tile_files.len(), 16);
    for (index, path) in summary.tile_files.iter().enumerate() {
        assert!(path.exists(), "tile file {index} exists");
    }
    assert!(summary.tile_files.first().expect("first tile").ends_with(
        Path::new("tiles_32/00_mask_0000_32.png")
    ));
    assert!(summary.tile_files.get(6).expect("seventh tile").ends_with(
        Path::new("tiles_32/06_mask_0110_32.png")
    ));

    assert!(summary.sheet_file.ends_with("coast16_32.png"));
    let sheet = image::open(&summary.sheet_file).expect("sheet opens").to_rgba8();
    assert_eq!(sheet.dimensions(), (128, 128));

    let rules = std::fs::read_to_string(&summary.rules_file).expect("rules read");
    assert!(rules.contains("texture_region_size = Vector2i(32, 32)"));
    // Code 15 sits at row 3, col 3 of the sheet
    assert!(rules.contains("3:3/0 = 0"));

    let manifest: TileSetManifest = serde_json::from_str(
        &std::fs::read_to_string(&summary.manifest_file).expect("manifest read"),
    )
    .expect("manifest parses");
    assert_eq!(manifest.schema, "coastile.tileset/1");
    assert_eq!(manifest.tile_size, 32);
    assert_eq!(manifest.columns, 4);
    assert_eq!(manifest.tiles.len(), 16);

    let sixth = manifest.tiles.get(6).expect("tile entry 6");
    assert_eq!(sixth.id, 6);
    assert_eq!(sixth.mask, "0110");
    assert_eq!(sixth.file, "tiles_32/06_mask_0110_32.png");

    assert_eq!(manifest.settings.line_style, "straight_line");
    assert!(manifest.textures.material_a.is_some());
}

#[test]
fn test_sheet_places_each_tile_row_major_by_code() {
    let materials = in_memory_materials();
    let settings = Settings::default();

    let tile_set = render_tile_set(&materials, &settings).expect("tile set renders");
    let sheet = assemble_sheet(&tile_set);

    for code in NeighborCode::all() {
        let (row, col) = code.sheet_position();
        assert_eq!((row, col), (u32::from(code.value()) / 4, u32::from(code.value()) % 4));

        let tile = tile_set.get(code).expect("tile present");
        for (x, y) in [(0, 0), (16, 16), (31, 31)] {
            assert_eq!(
                sheet.get_pixel(col * 32 + x, row * 32 + y),
                tile.get_pixel(x, y),
                "sheet pixel matches tile {code} at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_sheet_resizes_an_off_size_tile_instead_of_aborting() {
    let code = NeighborCode::new(0).expect("valid code");
    let off_size = RgbaImage::from_pixel(16, 16, RED);
    let tile_set = TileSet::new(32, vec![(code, off_size)]);

    let sheet = assemble_sheet(&tile_set);
    assert_eq!(sheet.dimensions(), (128, 128));
    assert_eq!(*sheet.get_pixel(0, 0), RED);
    assert_eq!(*sheet.get_pixel(31, 31), RED);
}

#[test]
fn test_identical_runs_produce_byte_identical_output() {
    let texture_dir = tempfile::tempdir().expect("texture dir");
    let textures = texture_paths(texture_dir.path());

    let settings = Settings {
        line_style: LineStyle::Craggy,
        ..Settings::default()
    };

    let dir_one = tempfile::tempdir().expect("first run dir");
    let dir_two = tempfile::tempdir().expect("second run dir");

    let first =
        synthesize_tile_set(dir_one.path(), &textures, &settings).expect("first run");
    let second =
        synthesize_tile_set(dir_two.path(), &textures, &settings).expect("second run");

    for (a, b) in first.tile_files.iter().zip(second.tile_files.iter()) {
        let bytes_a = std::fs::read(a).expect("first tile bytes");
        let bytes_b = std::fs::read(b).expect("second tile bytes");
        assert_eq!(bytes_a, bytes_b, "tile rasters must be byte-identical");
    }

    assert_eq!(
        std::fs::read(&first.sheet_file).expect("first sheet"),
        std::fs::read(&second.sheet_file).expect("second sheet"),
        "sheets must be byte-identical"
    );
}

#[test]
fn test_invalid_settings_fail_before_any_file_is_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings {
        tile_size: 0,
        ..Settings::default()
    };

    let result = synthesize_tile_set(&dir.path().join("out"), &TexturePaths::default(), &settings);
    assert!(result.is_err());
    assert!(
        !dir.path().join("out").exists(),
        "a failed run must not leave partial output"
    );
}

#[test]
fn test_runs_without_textures_still_produce_all_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = synthesize_tile_set(dir.path(), &TexturePaths::default(), &Settings::default())
        .expect("texture-less run succeeds");

    assert_eq!(summary.tile_files.len(), 16);
    let tile = image::open(summary.tile_files.first().expect("tile file"))
        .expect("tile opens")
        .to_rgba8();
    assert_eq!(*tile.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
}
