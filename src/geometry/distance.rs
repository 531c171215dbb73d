//! Signed Euclidean distance from a point to a boundary polyline
//!
//! The magnitude is the minimum distance to any segment. The sign is the
//! cross-product sign of the nearest segment's direction against the
//! vector from that segment's start to the query point, which identifies
//! the side of the boundary the point lies on.

use crate::geometry::point::Point;
use crate::geometry::polyline::Polyline;

/// Distance from a point to the closest position on a segment
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let length_sq = ab.dot(ab);
    if length_sq <= f64::EPSILON {
        return p.distance_to(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance_to(a.lerp(b, t))
}

/// Signed distance from a point to a polyline
///
/// Returns `distance * sign` where `sign` is `+1.0` when the point lies
/// on the counter-clockwise side of the nearest segment's direction and
/// `-1.0` otherwise. An empty or single-point polyline has no nearest
/// segment and yields `None`.
pub fn signed_distance(polyline: &Polyline, p: Point) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;

    for (a, b) in polyline.segments() {
        let distance = segment_distance(p, a, b);
        let closer = match best {
            Some((best_distance, _)) => distance < best_distance,
            None => true,
        };
        if closer {
            let sign = if (b - a).cross(p - a) >= 0.0 { 1.0 } else { -1.0 };
            best = Some((distance, sign));
        }
    }

    best.map(|(distance, sign)| distance * sign)
}

/// Which side of a polyline a point lies on, as `+1.0` or `-1.0`
///
/// Points exactly on the boundary report the positive side; recipe probe
/// points are placed strictly off the boundary so the distinction never
/// affects classification.
pub fn side_sign(polyline: &Polyline, p: Point) -> Option<f64> {
    signed_distance(polyline, p).map(|d| if d >= 0.0 { 1.0 } else { -1.0 })
}
