//! Boundary geometry primitives
//!
//! This module contains the computational-geometry half of the pipeline:
//! - Point arithmetic in tile-local coordinates
//! - Base polyline construction from recipe anchors
//! - Line-style modulation with endpoint-anchored displacement
//! - Signed-distance queries against polylines

/// Signed-distance and side queries against polylines
pub mod distance;
/// 2D point arithmetic
pub mod point;
/// Boundary polyline construction and anchor resolution
pub mod polyline;
/// Line-style modulation of base polylines
pub mod style;

pub use point::Point;
pub use polyline::Polyline;
