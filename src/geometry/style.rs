//! Line-style modulation of base boundary polylines
//!
//! Reshapes a boundary while preserving exact endpoint anchoring: every
//! displacement is scaled by `sin(pi * t)` over the segment parameter, so
//! offsets are forced to zero at both ends of every segment and adjacent
//! tiles keep connecting seamlessly.
//!
//! The craggy style derives its irregularity from a fixed integer hash of
//! sample position. No runtime-seeded randomness is involved anywhere, so
//! identical inputs always reproduce identical curves.

use crate::geometry::point::Point;
use crate::geometry::polyline::Polyline;
use std::f64::consts::{PI, TAU};

/// Quantization density (cells per pixel) for hash keys derived from
/// sample positions
const HASH_LATTICE_DENSITY: f64 = 8.0;

/// Boundary rendering style selecting the displacement waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Identity transform; the base polyline is rendered as-is
    StraightLine,
    /// Sine-wave displacement along the boundary
    WavySmooth,
    /// Hash-driven step displacement, optionally stair-quantized
    Craggy,
    /// Triangle-wave displacement along the boundary
    Zigzag,
}

impl LineStyle {
    /// Canonical settings-surface name of this style
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StraightLine => "straight_line",
            Self::WavySmooth => "wavy_smooth",
            Self::Craggy => "craggy",
            Self::Zigzag => "zigzag",
        }
    }
}

/// Waveform parameters shared by the non-identity styles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    /// Peak displacement in pixels
    pub amplitude: f64,
    /// Arc-length period of the waveform in pixels
    pub wavelength: f64,
    /// Per-sample hash wobble added by the craggy style, in pixels
    pub jitter: f64,
    /// Stair-step grid for craggy displacement quantization, in pixels;
    /// zero disables quantization
    pub stair_step: f64,
}

/// Reshape a base polyline according to the selected line style
///
/// Each base segment is walked at one sample per pixel of length or
/// finer. The per-sample normal offset is the style waveform evaluated at
/// the cumulative arc length, multiplied by the `sin(pi * t)` endpoint
/// envelope. `StraightLine` returns the base polyline unchanged.
pub fn modulate(base: &Polyline, style: LineStyle, params: &StyleParams) -> Polyline {
    if style == LineStyle::StraightLine {
        return base.clone();
    }

    let mut points = Vec::new();
    let mut arc_offset = 0.0;

    for (start, end) in base.segments() {
        let length = start.distance_to(end);
        let Some(normal) = (end - start).unit_normal() else {
            continue;
        };

        let samples = (length.ceil() as usize).max(1);
        let segment_key = position_key(start) ^ position_key(end).rotate_left(17);

        for i in 0..samples {
            let t = i as f64 / samples as f64;
            let base_point = start.lerp(end, t);
            let s = length.mul_add(t, arc_offset);

            let raw = match style {
                LineStyle::StraightLine => 0.0,
                LineStyle::WavySmooth => sine_offset(s, params),
                LineStyle::Zigzag => triangle_offset(s, params),
                LineStyle::Craggy => craggy_offset(s, base_point, segment_key, params),
            };

            let envelope = (PI * t).sin();
            points.push(base_point + normal * (raw * envelope));
        }

        arc_offset += length;
    }

    if let Some(last) = base.last() {
        points.push(last);
    }

    Polyline::new(points)
}

// Sine wave over cumulative arc length
fn sine_offset(s: f64, params: &StyleParams) -> f64 {
    let wavelength = params.wavelength.max(f64::EPSILON);
    params.amplitude * (TAU * s / wavelength).sin()
}

// Triangle wave in [-1, 1] over cumulative arc length
fn triangle_offset(s: f64, params: &StyleParams) -> f64 {
    let wavelength = params.wavelength.max(f64::EPSILON);
    let phase = (s / wavelength).rem_euclid(1.0);
    let wave = if phase < 0.5 {
        4.0f64.mul_add(phase, -1.0)
    } else {
        (-4.0f64).mul_add(phase, 3.0)
    };
    params.amplitude * wave
}

// Step function held constant per wavelength cell, plus a per-sample
// wobble, optionally snapped to a stair-step grid
fn craggy_offset(s: f64, base_point: Point, segment_key: u64, params: &StyleParams) -> f64 {
    let wavelength = params.wavelength.max(f64::EPSILON);
    let cell = (s / wavelength).floor() as i64;
    let step = hash_signed(segment_key ^ (cell as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let wobble = hash_signed(position_key(base_point));

    let mut offset = params.jitter.mul_add(wobble, params.amplitude * step);
    if params.stair_step > f64::EPSILON {
        offset = (offset / params.stair_step).round() * params.stair_step;
    }
    offset
}

// Key a point by its position on a fixed sub-pixel lattice
fn position_key(p: Point) -> u64 {
    let qx = (p.x * HASH_LATTICE_DENSITY).round() as i64;
    let qy = (p.y * HASH_LATTICE_DENSITY).round() as i64;
    ((qx as u64) << 32) ^ ((qy as u64) & 0xFFFF_FFFF)
}

// Fixed 64-bit integer mix (splitmix-style finalizer)
fn mix(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    x ^= x >> 33;
    x = x.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    x ^ (x >> 33)
}

// Hash to a value uniformly placed in [-1, 1]
fn hash_signed(key: u64) -> f64 {
    let unit = (mix(key) >> 11) as f64 / (1u64 << 53) as f64;
    2.0f64.mul_add(unit, -1.0)
}
