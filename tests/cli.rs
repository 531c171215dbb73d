//! Validates CLI argument parsing and its mapping onto run settings

use clap::Parser;
use coastile::geometry::style::LineStyle;
use coastile::io::cli::Cli;
use coastile::io::configuration::CornerStyle;
use std::path::PathBuf;

#[test]
fn test_defaults_match_the_documented_settings_surface() {
    let cli = Cli::parse_from(["coastile", "out"]);
    let settings = cli.settings();

    assert_eq!(settings.tile_size, 32);
    assert_eq!(settings.band_width, 4);
    assert_eq!(settings.corner_style, CornerStyle::Stepped);
    assert_eq!(settings.line_style, LineStyle::StraightLine);
    assert!((settings.texture_scale - 1.0).abs() < f64::EPSILON);
    assert_eq!(settings.palette_name, "default");
    assert!(!cli.quiet);
    assert!(!cli.force);
}

#[test]
fn test_style_names_use_the_settings_surface_spelling() {
    let cli = Cli::parse_from([
        "coastile",
        "out",
        "--line-style",
        "wavy_smooth",
        "--corner-style",
        "quarter",
    ]);
    let settings = cli.settings();

    assert_eq!(settings.line_style, LineStyle::WavySmooth);
    assert_eq!(settings.corner_style, CornerStyle::Quarter);
}

#[test]
fn test_texture_paths_map_through() {
    let cli = Cli::parse_from([
        "coastile",
        "out",
        "--material-a",
        "grass.png",
        "--material-b",
        "water.png",
        "--transition",
        "foam.png",
    ]);
    let textures = cli.texture_paths();

    assert_eq!(textures.material_a, Some(PathBuf::from("grass.png")));
    assert_eq!(textures.material_b, Some(PathBuf::from("water.png")));
    assert_eq!(textures.transition, Some(PathBuf::from("foam.png")));
}

#[test]
fn test_unknown_style_values_are_rejected() {
    assert!(Cli::try_parse_from(["coastile", "out", "--line-style", "squiggle"]).is_err());
}
