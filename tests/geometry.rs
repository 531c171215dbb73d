//! Validates polyline construction, style modulation anchoring, and
//! signed-distance behavior

use coastile::geometry::distance::{side_sign, signed_distance};
use coastile::geometry::point::Point;
use coastile::geometry::polyline::{build_boundary, Anchor, CornerTurn, Polyline};
use coastile::geometry::style::{modulate, LineStyle, StyleParams};

const EPSILON: f64 = 1e-9;

fn params() -> StyleParams {
    StyleParams {
        amplitude: 3.0,
        wavelength: 6.0,
        jitter: 1.0,
        stair_step: 0.5,
    }
}

fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

#[test]
fn test_opposite_anchors_build_a_two_point_straight_split() {
    let line = build_boundary(32, [Anchor::LeftMid, Anchor::RightMid], CornerTurn::Beveled)
        .expect("straight split");

    assert_eq!(line.points().len(), 2);
    assert!(approx_eq(line.first().expect("start"), Point::new(0.0, 15.5)));
    assert!(approx_eq(line.last().expect("end"), Point::new(31.0, 15.5)));
}

#[test]
fn test_perpendicular_anchors_route_through_the_tile_center() {
    let beveled = build_boundary(32, [Anchor::TopMid, Anchor::LeftMid], CornerTurn::Beveled)
        .expect("beveled wedge");
    assert_eq!(beveled.points().len(), 3);
    assert!(approx_eq(
        beveled.points().get(1).copied().expect("center vertex"),
        Point::new(15.5, 15.5)
    ));

    let rounded = build_boundary(32, [Anchor::TopMid, Anchor::LeftMid], CornerTurn::Rounded)
        .expect("rounded wedge");
    assert_eq!(rounded.points().len(), 5);

    // Shoulder vertices sit 60% of the way from each endpoint to center
    let start = Point::new(15.5, 0.0);
    let center = Point::new(15.5, 15.5);
    assert!(approx_eq(
        rounded.points().get(1).copied().expect("first shoulder"),
        start.lerp(center, 0.6)
    ));
    assert!(approx_eq(
        rounded.points().get(3).copied().expect("second shoulder"),
        Point::new(0.0, 15.5).lerp(center, 0.6)
    ));
}

// Adjacent tiles share edge-midpoint endpoints; every style must leave
// those endpoints exactly in place or tiling seams appear
#[test]
fn test_modulation_preserves_endpoints_exactly_for_every_style() {
    let styles = [
        LineStyle::StraightLine,
        LineStyle::WavySmooth,
        LineStyle::Craggy,
        LineStyle::Zigzag,
    ];

    for turn in [CornerTurn::Beveled, CornerTurn::Rounded] {
        let base = build_boundary(32, [Anchor::TopMid, Anchor::RightMid], turn)
            .expect("wedge boundary");
        let first = base.first().expect("base start");
        let last = base.last().expect("base end");

        for style in styles {
            let styled = modulate(&base, style, &params());
            assert!(
                approx_eq(styled.first().expect("styled start"), first),
                "style {style:?} moved the start endpoint"
            );
            assert!(
                approx_eq(styled.last().expect("styled end"), last),
                "style {style:?} moved the end endpoint"
            );
        }
    }
}

#[test]
fn test_modulation_pins_interior_vertices_of_the_base() {
    let base = build_boundary(32, [Anchor::TopMid, Anchor::LeftMid], CornerTurn::Beveled)
        .expect("wedge boundary");
    let center = Point::new(15.5, 15.5);

    let styled = modulate(&base, LineStyle::WavySmooth, &params());
    assert!(
        styled.points().iter().any(|&p| approx_eq(p, center)),
        "the center vertex must survive modulation unmoved"
    );
}

#[test]
fn test_modulation_densifies_to_at_least_one_sample_per_pixel() {
    let base = build_boundary(32, [Anchor::LeftMid, Anchor::RightMid], CornerTurn::Beveled)
        .expect("straight split");

    let styled = modulate(&base, LineStyle::Zigzag, &params());
    assert!(
        styled.points().len() as f64 >= base.arc_length(),
        "expected ~1 point per pixel of arc length, got {} points for length {}",
        styled.points().len(),
        base.arc_length()
    );
}

#[test]
fn test_craggy_modulation_is_deterministic_across_calls() {
    let base = build_boundary(32, [Anchor::BottomMid, Anchor::LeftMid], CornerTurn::Beveled)
        .expect("wedge boundary");

    let first = modulate(&base, LineStyle::Craggy, &params());
    let second = modulate(&base, LineStyle::Craggy, &params());
    assert_eq!(
        first.points(),
        second.points(),
        "craggy displacement must be a pure function of position"
    );
}

#[test]
fn test_signed_distance_separates_the_two_sides_of_a_split() {
    let line = Polyline::new(vec![Point::new(0.0, 15.5), Point::new(31.0, 15.5)]);

    let above = signed_distance(&line, Point::new(10.0, 10.0)).expect("distance above");
    let below = signed_distance(&line, Point::new(10.0, 20.0)).expect("distance below");

    assert!((above.abs() - 5.5).abs() < EPSILON);
    assert!((below.abs() - 4.5).abs() < EPSILON);
    assert!(
        above.signum() != below.signum(),
        "points on opposite sides must have opposite signs"
    );

    assert_eq!(side_sign(&line, Point::new(10.0, 10.0)), Some(-1.0));
    assert_eq!(side_sign(&line, Point::new(10.0, 20.0)), Some(1.0));
}

#[test]
fn test_signed_distance_of_a_degenerate_polyline_is_none() {
    let empty = Polyline::new(vec![]);
    let single = Polyline::new(vec![Point::new(1.0, 1.0)]);

    assert!(signed_distance(&empty, Point::new(0.0, 0.0)).is_none());
    assert!(signed_distance(&single, Point::new(0.0, 0.0)).is_none());
}

#[test]
fn test_coincident_anchors_are_rejected_as_degenerate() {
    assert!(build_boundary(32, [Anchor::TopMid, Anchor::TopMid], CornerTurn::Beveled).is_err());
}
