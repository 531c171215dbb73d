//! Validates totality, probe stability, and structure of the static
//! recipe table

use coastile::geometry::polyline::CornerTurn;
use coastile::geometry::style::{LineStyle, StyleParams};
use coastile::recipe::mask::NeighborCode;
use coastile::recipe::table::{recipe_for, Combiner, MaterialSide, RecipeKind};
use coastile::render::classify::TileField;
use std::collections::HashSet;

const ALL_STYLES: [LineStyle; 4] = [
    LineStyle::StraightLine,
    LineStyle::WavySmooth,
    LineStyle::Craggy,
    LineStyle::Zigzag,
];

fn default_params() -> StyleParams {
    StyleParams {
        amplitude: 2.0,
        wavelength: 8.0,
        jitter: 0.75,
        stair_step: 1.0,
    }
}

#[test]
fn test_table_is_total_over_all_sixteen_codes() {
    let mut names = HashSet::new();

    for code in NeighborCode::all() {
        let recipe = recipe_for(code, CornerTurn::Beveled, LineStyle::StraightLine);
        assert_eq!(recipe.code, code);
        assert!(
            names.insert(recipe.name),
            "duplicate recipe name {}",
            recipe.name
        );
    }

    assert_eq!(names.len(), NeighborCode::COUNT);
}

#[test]
fn test_fill_and_split_codes_have_expected_kinds() {
    let kind_of = |id: u8| {
        let code = NeighborCode::new(id).expect("valid code");
        recipe_for(code, CornerTurn::Beveled, LineStyle::StraightLine).kind
    };

    assert!(matches!(kind_of(14), RecipeKind::Fill(MaterialSide::A)));
    assert!(matches!(kind_of(15), RecipeKind::Fill(MaterialSide::B)));
    assert!(matches!(
        kind_of(12),
        RecipeKind::Split {
            combine: Combiner::Equal,
            ..
        }
    ));
    assert!(matches!(
        kind_of(13),
        RecipeKind::Split {
            combine: Combiner::Xor,
            ..
        }
    ));

    for id in 0..12 {
        assert!(
            matches!(kind_of(id), RecipeKind::Boundary { .. }),
            "code {id} should be a single-boundary recipe"
        );
    }
}

#[test]
fn test_every_recipe_resolves_to_a_field_without_degeneracy() {
    let params = default_params();

    for code in NeighborCode::all() {
        for turn in [CornerTurn::Beveled, CornerTurn::Rounded] {
            for style in ALL_STYLES {
                let recipe = recipe_for(code, turn, style);
                TileField::from_recipe(&recipe, 32, &params)
                    .expect("static table must never produce degenerate geometry");
            }
        }
    }
}

// The probe pixel is the fixed source of truth for which side is material
// A; it must classify as A for every code, style, and band width
#[test]
fn test_probe_classifies_as_material_a_for_every_style_and_band() {
    let params = default_params();
    let tile_size = 32;

    for code in NeighborCode::all() {
        for style in ALL_STYLES {
            let recipe = recipe_for(code, CornerTurn::Beveled, style);
            let Some(probe) = recipe.probe() else {
                // Only the all-B fill has no material A pixel
                assert_eq!(code.value(), 15);
                continue;
            };

            let field =
                TileField::from_recipe(&recipe, tile_size, &params).expect("valid recipe");

            for band_width in [0.0, 2.0, 4.0] {
                let classification = field.classify(probe.position(tile_size), band_width / 2.0);
                assert_eq!(
                    classification.side,
                    MaterialSide::A,
                    "probe for code {code} must stay material A (style {style:?}, band {band_width})"
                );
            }
        }
    }
}

#[test]
fn test_probe_positions_resolve_strictly_inside_the_tile() {
    for code in NeighborCode::all() {
        let recipe = recipe_for(code, CornerTurn::Beveled, LineStyle::StraightLine);
        if let Some(probe) = recipe.probe() {
            let p = probe.position(32);
            assert!(p.x > 0.0 && p.x < 31.0, "code {code} probe x in bounds");
            assert!(p.y > 0.0 && p.y < 31.0, "code {code} probe y in bounds");
        }
    }
}
