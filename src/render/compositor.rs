//! Final pixel color sampling and straight-alpha compositing

use crate::render::classify::PixelClassification;
use crate::render::sampler::MaterialSet;
use image::Rgba;

/// Composite a foreground sample "over" a background sample
///
/// Standard straight-alpha compositing:
/// `outA = fa + ba * (1 - fa)` and
/// `outRGB = (fgRGB * fa + bgRGB * ba * (1 - fa)) / outA`,
/// with a fully transparent result when `outA` is zero.
pub fn composite_over(fg: Rgba<u8>, bg: Rgba<u8>) -> Rgba<u8> {
    let fa = f64::from(fg.0[3]) / 255.0;
    let ba = f64::from(bg.0[3]) / 255.0;
    let out_a = ba.mul_add(1.0 - fa, fa);

    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |f: u8, b: u8| {
        let f = f64::from(f);
        let b = f64::from(b);
        let channel = (b * ba).mul_add(1.0 - fa, f * fa) / out_a;
        channel.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(fg.0[0], bg.0[0]),
        blend(fg.0[1], bg.0[1]),
        blend(fg.0[2], bg.0[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Produce the final color for one classified pixel
///
/// The base sample comes from the classified material side. Band pixels
/// composite the transition texture over the base sample when one is
/// configured; without a transition texture the band falls through to
/// the base sample unchanged (a hard edge at the sign flip).
pub fn shade_pixel(
    classification: PixelClassification,
    x: u32,
    y: u32,
    materials: &MaterialSet,
) -> Rgba<u8> {
    let base = materials.side_sampler(classification.side).sample(x, y);

    match &materials.transition {
        Some(transition) if classification.in_band => {
            composite_over(transition.sample(x, y), base)
        }
        _ => base,
    }
}
