//! Performance measurement for complete 16-tile set synthesis

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use coastile::geometry::style::LineStyle;
use coastile::io::configuration::Settings;
use coastile::render::sampler::{MaterialSet, TextureSampler};
use coastile::render::sheet::assemble_sheet;
use coastile::render::tile::render_tile_set;
use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use std::hint::black_box;

fn materials() -> MaterialSet {
    MaterialSet {
        material_a: TextureSampler::from_image(
            RgbaImage::from_pixel(64, 64, Rgba([40, 160, 70, 255])),
            1.0,
        ),
        material_b: TextureSampler::from_image(
            RgbaImage::from_pixel(64, 64, Rgba([40, 90, 180, 255])),
            1.0,
        ),
        transition: Some(TextureSampler::from_image(
            RgbaImage::from_pixel(64, 64, Rgba([230, 220, 170, 200])),
            1.0,
        )),
    }
}

/// Measures full tile-set rendering and sheet assembly at 32px tiles
fn bench_render_full_tile_set(c: &mut Criterion) {
    let materials = materials();

    for style in [LineStyle::StraightLine, LineStyle::Craggy] {
        let settings = Settings {
            line_style: style,
            ..Settings::default()
        };

        c.bench_function(&format!("render_tile_set_{}", style.as_str()), |b| {
            b.iter(|| {
                let Ok(tile_set) = render_tile_set(&materials, &settings) else {
                    return;
                };
                black_box(assemble_sheet(&tile_set));
            });
        });
    }
}

criterion_group!(benches, bench_render_full_tile_set);
criterion_main!(benches);
