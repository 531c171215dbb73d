//! Boundary polyline construction from recipe anchor points
//!
//! Every boundary begins and ends exactly at an edge midpoint or tile
//! corner so that adjacent tiles sharing that edge connect without any
//! discontinuity. Perpendicular-edge pairs route through the tile center.

use crate::geometry::point::Point;
use std::error::Error;
use std::fmt;

/// Fraction of the endpoint-to-center run covered by each rounded-turn
/// shoulder vertex
const ROUNDED_SHOULDER_FRACTION: f64 = 0.6;

/// Error raised when a boundary's anchor points collapse to fewer than
/// two distinct positions
///
/// This indicates a defect in the static recipe table rather than a
/// recoverable input condition.
#[derive(Debug, Clone)]
pub struct DegenerateBoundary {
    /// The coincident anchor position
    pub position: Point,
}

impl fmt::Display for DegenerateBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "boundary endpoints collapse to a single point ({}, {})",
            self.position.x, self.position.y
        )
    }
}

impl Error for DegenerateBoundary {}

/// Named anchor position on the tile border
///
/// Anchors are resolved against a concrete tile size at build time so the
/// recipe table itself stays size-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Midpoint of the top edge
    TopMid,
    /// Midpoint of the right edge
    RightMid,
    /// Midpoint of the bottom edge
    BottomMid,
    /// Midpoint of the left edge
    LeftMid,
}

impl Anchor {
    /// Resolve this anchor to tile-local coordinates for a tile of the
    /// given size
    pub fn position(self, tile_size: u32) -> Point {
        let max = f64::from(tile_size.saturating_sub(1));
        let mid = max / 2.0;
        match self {
            Self::TopMid => Point::new(mid, 0.0),
            Self::RightMid => Point::new(max, mid),
            Self::BottomMid => Point::new(mid, max),
            Self::LeftMid => Point::new(0.0, mid),
        }
    }

    /// Whether this anchor shares a tile edge axis with another
    ///
    /// Anchors on opposite edges produce a straight split; anchors on
    /// perpendicular edges produce a wedge routed through the center.
    pub const fn opposes(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::TopMid, Self::BottomMid)
                | (Self::BottomMid, Self::TopMid)
                | (Self::LeftMid, Self::RightMid)
                | (Self::RightMid, Self::LeftMid)
        )
    }
}

/// How a wedge boundary turns at the tile center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerTurn {
    /// Sharp turn at the center vertex
    Beveled,
    /// Shoulder vertices interpolated toward the center soften the turn
    Rounded,
}

/// An ordered open polyline in tile-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Create a polyline from an ordered point list
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Ordered vertices of the polyline
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First vertex, if any
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last vertex, if any
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive vertex pairs as segments
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).filter_map(|pair| {
            let a = pair.first().copied()?;
            let b = pair.get(1).copied()?;
            Some((a, b))
        })
    }

    /// Total arc length over all segments
    pub fn arc_length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance_to(b)).sum()
    }
}

/// Build the base boundary polyline between two anchors
///
/// Opposite-edge anchors yield a 2-point straight split. Perpendicular
/// anchors yield a wedge routed through the tile center: 3 points for a
/// beveled turn, 5 points for a rounded turn with shoulder vertices
/// interpolated 60% from each endpoint toward the center.
///
/// # Errors
///
/// Returns [`DegenerateBoundary`] if the two anchors resolve to the same
/// position, which only a defective recipe can produce.
pub fn build_boundary(
    tile_size: u32,
    anchors: [Anchor; 2],
    turn: CornerTurn,
) -> Result<Polyline, DegenerateBoundary> {
    let [start_anchor, end_anchor] = anchors;
    let start = start_anchor.position(tile_size);
    let end = end_anchor.position(tile_size);

    if start.distance_to(end) <= f64::EPSILON {
        return Err(DegenerateBoundary { position: start });
    }

    if start_anchor.opposes(end_anchor) {
        return Ok(Polyline::new(vec![start, end]));
    }

    let max = f64::from(tile_size.saturating_sub(1));
    let center = Point::new(max / 2.0, max / 2.0);

    let points = match turn {
        CornerTurn::Beveled => vec![start, center, end],
        CornerTurn::Rounded => vec![
            start,
            start.lerp(center, ROUNDED_SHOULDER_FRACTION),
            center,
            end.lerp(center, ROUNDED_SHOULDER_FRACTION),
            end,
        ],
    };

    Ok(Polyline::new(points))
}
