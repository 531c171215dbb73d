//! Per-pixel material classification against boundary fields
//!
//! The classifier carries both the base and the styled polyline through
//! the pipeline as distinct values: the probe's side is resolved once
//! against the base, unmodulated curve and is the single source of truth
//! for which side is material A, while per-pixel distances are measured
//! against the styled curve actually being rendered. Collapsing the two
//! would let a style change silently alter topology.

use crate::geometry::distance::{side_sign, signed_distance};
use crate::geometry::point::Point;
use crate::geometry::polyline::{build_boundary, Polyline};
use crate::geometry::style::{modulate, StyleParams};
use crate::io::error::{Result, SynthesisError};
use crate::recipe::table::{Combiner, MaterialSide, RecipeKind, SplitLine, TileRecipe};

/// Tri-state result of classifying one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelClassification {
    /// Material side the pixel samples from
    pub side: MaterialSide,
    /// Whether the pixel lies within the transition band
    pub in_band: bool,
}

impl PixelClassification {
    /// Classification of a pixel in a fill tile: fixed side, never in band
    pub const fn fill(side: MaterialSide) -> Self {
        Self {
            side,
            in_band: false,
        }
    }
}

/// One boundary with its probe-derived reference side resolved
#[derive(Debug, Clone)]
pub struct BoundaryField {
    styled: Polyline,
    reference_sign: f64,
}

impl BoundaryField {
    /// Build a field from resolved geometry
    ///
    /// The reference sign is computed from the probe position against the
    /// base polyline and is never recomputed against the styled curve.
    /// Returns `None` when the base polyline has no segments.
    pub fn new(base: &Polyline, styled: Polyline, probe_position: Point) -> Option<Self> {
        let reference_sign = side_sign(base, probe_position)?;
        Some(Self {
            styled,
            reference_sign,
        })
    }

    /// The styled polyline this field measures distances against
    pub const fn styled(&self) -> &Polyline {
        &self.styled
    }

    /// Whether a pixel sits on the probe's side, and whether it is in band
    ///
    /// A field built through [`BoundaryField::new`] always has segments;
    /// the degenerate fallback reports the probe side out of band.
    pub fn sample(&self, p: Point, half_band: f64) -> (bool, bool) {
        let Some(distance) = signed_distance(&self.styled, p) else {
            return (true, false);
        };
        let sign = if distance >= 0.0 { 1.0 } else { -1.0 };
        let matches_reference = (sign - self.reference_sign).abs() < f64::EPSILON;
        (matches_reference, distance.abs() <= half_band)
    }
}

/// Complete classification field for one tile
#[derive(Debug, Clone)]
pub enum TileField {
    /// Whole tile is one material; no classification is performed
    Fill(MaterialSide),
    /// Single boundary separating the two materials
    Single(BoundaryField),
    /// Two independent splits combined per quadrant
    Split {
        /// Fields of the vertical and horizontal splits
        lines: [BoundaryField; 2],
        /// How the two split side-matches combine
        combine: Combiner,
    },
}

impl TileField {
    /// Resolve a recipe into a classification field for a tile size
    ///
    /// Builds the base polylines, applies the recipe's line style, and
    /// fixes each boundary's reference side from its probe.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::DegenerateRecipe`] if any boundary's
    /// anchors collapse to fewer than two distinct points, which
    /// indicates a defect in the static recipe table.
    pub fn from_recipe(recipe: &TileRecipe, tile_size: u32, params: &StyleParams) -> Result<Self> {
        match &recipe.kind {
            RecipeKind::Fill(side) => Ok(Self::Fill(*side)),
            RecipeKind::Boundary { anchors, probe } => {
                let field = build_field(
                    recipe,
                    tile_size,
                    params,
                    &SplitLine {
                        anchors: *anchors,
                        probe: *probe,
                    },
                )?;
                Ok(Self::Single(field))
            }
            RecipeKind::Split { lines, combine, .. } => {
                let vertical = build_field(recipe, tile_size, params, lines.first().ok_or(
                    SynthesisError::DegenerateRecipe {
                        code: recipe.code.value(),
                        reason: "split recipe is missing its vertical line",
                    },
                )?)?;
                let horizontal = build_field(recipe, tile_size, params, lines.get(1).ok_or(
                    SynthesisError::DegenerateRecipe {
                        code: recipe.code.value(),
                        reason: "split recipe is missing its horizontal line",
                    },
                )?)?;
                Ok(Self::Split {
                    lines: [vertical, horizontal],
                    combine: *combine,
                })
            }
        }
    }

    /// Classify one pixel center against this field
    pub fn classify(&self, p: Point, half_band: f64) -> PixelClassification {
        match self {
            Self::Fill(side) => PixelClassification::fill(*side),
            Self::Single(field) => {
                let (matches, in_band) = field.sample(p, half_band);
                PixelClassification {
                    side: side_from_match(matches),
                    in_band,
                }
            }
            Self::Split { lines, combine } => {
                let [vertical, horizontal] = lines;
                let (match_v, band_v) = vertical.sample(p, half_band);
                let (match_h, band_h) = horizontal.sample(p, half_band);
                let is_a = match combine {
                    Combiner::Equal => match_v == match_h,
                    Combiner::Xor => match_v != match_h,
                };
                PixelClassification {
                    side: side_from_match(is_a),
                    in_band: band_v || band_h,
                }
            }
        }
    }
}

const fn side_from_match(is_a: bool) -> MaterialSide {
    if is_a {
        MaterialSide::A
    } else {
        MaterialSide::B
    }
}

fn build_field(
    recipe: &TileRecipe,
    tile_size: u32,
    params: &StyleParams,
    line: &SplitLine,
) -> Result<BoundaryField> {
    let base = build_boundary(tile_size, line.anchors, recipe.turn).map_err(|_| {
        SynthesisError::DegenerateRecipe {
            code: recipe.code.value(),
            reason: "boundary anchors collapse to a single point",
        }
    })?;
    let styled = modulate(&base, recipe.style, params);

    BoundaryField::new(&base, styled, line.probe.position(tile_size)).ok_or(
        SynthesisError::DegenerateRecipe {
            code: recipe.code.value(),
            reason: "boundary has no segments to classify against",
        },
    )
}
