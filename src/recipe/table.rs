//! Static recipe table mapping neighbor codes to boundary geometry
//!
//! The table is a pure, total function over the 16-code domain. Codes 14
//! and 15 are whole-tile fills and never touch boundary logic; codes 12
//! and 13 are the diagonal-pair cases combining two independent splits;
//! everything else is a single boundary between two border anchors.

use crate::geometry::point::Point;
use crate::geometry::polyline::{Anchor, CornerTurn};
use crate::geometry::style::LineStyle;
use crate::recipe::mask::NeighborCode;

/// Which of the two base materials a region belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSide {
    /// The primary material
    A,
    /// The secondary material
    B,
}

/// How the two split classifications of a diagonal-pair recipe combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combiner {
    /// Material A where both splits agree with their reference sides
    Equal,
    /// Material A where exactly one split agrees with its reference side
    Xor,
}

/// A reference pixel expressed as fractions of the tile span
///
/// Probes resolve against a concrete tile size like anchors do, and are
/// placed strictly inside their intended region, never on a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// Horizontal position as a fraction of the tile span
    pub fx: f64,
    /// Vertical position as a fraction of the tile span
    pub fy: f64,
}

impl Probe {
    /// Create a probe from span fractions
    pub const fn new(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    /// Resolve to tile-local coordinates for a tile of the given size
    pub fn position(self, tile_size: u32) -> Point {
        let max = f64::from(tile_size.saturating_sub(1));
        Point::new(self.fx * max, self.fy * max)
    }
}

/// One independent split of a diagonal-pair recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLine {
    /// Border anchors of the split boundary
    pub anchors: [Anchor; 2],
    /// Reference pixel fixing which side of this split counts as a match
    pub probe: Probe,
}

/// Geometric construction for one tile of the set
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeKind {
    /// The whole tile is a single material; no boundary is rendered
    Fill(MaterialSide),
    /// A single boundary between two border anchors
    Boundary {
        /// Border anchors of the boundary
        anchors: [Anchor; 2],
        /// Pixel known a priori to lie in material A
        probe: Probe,
    },
    /// Two independent splits combined per quadrant
    Split {
        /// The vertical and horizontal split definitions
        lines: [SplitLine; 2],
        /// How the two split classifications combine
        combine: Combiner,
        /// Pixel known a priori to lie in material A
        probe: Probe,
    },
}

/// Immutable construction recipe for one neighbor code
#[derive(Debug, Clone, PartialEq)]
pub struct TileRecipe {
    /// The code this recipe renders
    pub code: NeighborCode,
    /// Human-readable tile name used in the manifest
    pub name: &'static str,
    /// Geometric construction
    pub kind: RecipeKind,
    /// Corner-turn policy applied to wedge boundaries
    pub turn: CornerTurn,
    /// Line style applied to rendered boundaries
    pub style: LineStyle,
}

impl TileRecipe {
    /// The recipe's known-A probe pixel, if the tile has any material A
    ///
    /// Only the all-B fill has none.
    pub const fn probe(&self) -> Option<Probe> {
        match &self.kind {
            RecipeKind::Fill(MaterialSide::A) => Some(Probe::new(0.5, 0.5)),
            RecipeKind::Fill(MaterialSide::B) => None,
            RecipeKind::Boundary { probe, .. } | RecipeKind::Split { probe, .. } => Some(*probe),
        }
    }
}

// Sub-line reference probe for both diagonal-pair recipes: strictly
// inside the NW quadrant, off both split boundaries
const SPLIT_REFERENCE_PROBE: Probe = Probe::new(0.15, 0.15);

/// Look up the recipe for a neighbor code
///
/// Total and deterministic over the full `0..=15` domain. The corner-turn
/// policy and line style are threaded in from the run settings and
/// embedded in the returned recipe.
pub fn recipe_for(code: NeighborCode, turn: CornerTurn, style: LineStyle) -> TileRecipe {
    let (name, kind) = match code.value() {
        0 => boundary(
            "half_top_a",
            [Anchor::LeftMid, Anchor::RightMid],
            Probe::new(0.5, 0.25),
        ),
        1 => boundary(
            "half_right_a",
            [Anchor::TopMid, Anchor::BottomMid],
            Probe::new(0.75, 0.5),
        ),
        2 => boundary(
            "half_bottom_a",
            [Anchor::LeftMid, Anchor::RightMid],
            Probe::new(0.5, 0.75),
        ),
        3 => boundary(
            "half_left_a",
            [Anchor::TopMid, Anchor::BottomMid],
            Probe::new(0.25, 0.5),
        ),
        4 => boundary(
            "wedge_a_nw",
            [Anchor::TopMid, Anchor::LeftMid],
            Probe::new(0.15, 0.15),
        ),
        5 => boundary(
            "wedge_a_ne",
            [Anchor::TopMid, Anchor::RightMid],
            Probe::new(0.85, 0.15),
        ),
        6 => boundary(
            "wedge_a_se",
            [Anchor::RightMid, Anchor::BottomMid],
            Probe::new(0.85, 0.85),
        ),
        7 => boundary(
            "wedge_a_sw",
            [Anchor::BottomMid, Anchor::LeftMid],
            Probe::new(0.15, 0.85),
        ),
        8 => boundary(
            "wedge_b_nw",
            [Anchor::TopMid, Anchor::LeftMid],
            Probe::new(0.85, 0.85),
        ),
        9 => boundary(
            "wedge_b_ne",
            [Anchor::TopMid, Anchor::RightMid],
            Probe::new(0.15, 0.85),
        ),
        10 => boundary(
            "wedge_b_se",
            [Anchor::RightMid, Anchor::BottomMid],
            Probe::new(0.15, 0.15),
        ),
        11 => boundary(
            "wedge_b_sw",
            [Anchor::BottomMid, Anchor::LeftMid],
            Probe::new(0.85, 0.15),
        ),
        12 => split("diagonal_nw_se_a", Combiner::Equal, Probe::new(0.15, 0.15)),
        13 => split("diagonal_ne_sw_a", Combiner::Xor, Probe::new(0.85, 0.15)),
        14 => ("fill_a", RecipeKind::Fill(MaterialSide::A)),
        // NeighborCode is a 4-bit domain; 15 is the only remaining value
        _ => ("fill_b", RecipeKind::Fill(MaterialSide::B)),
    };

    TileRecipe {
        code,
        name,
        kind,
        turn,
        style,
    }
}

const fn boundary(
    name: &'static str,
    anchors: [Anchor; 2],
    probe: Probe,
) -> (&'static str, RecipeKind) {
    (name, RecipeKind::Boundary { anchors, probe })
}

const fn split(name: &'static str, combine: Combiner, probe: Probe) -> (&'static str, RecipeKind) {
    (
        name,
        RecipeKind::Split {
            lines: [
                SplitLine {
                    anchors: [Anchor::TopMid, Anchor::BottomMid],
                    probe: SPLIT_REFERENCE_PROBE,
                },
                SplitLine {
                    anchors: [Anchor::LeftMid, Anchor::RightMid],
                    probe: SPLIT_REFERENCE_PROBE,
                },
            ],
            combine,
            probe,
        },
    )
}
