use super::*;

#[test]
fn degenerate_segment_collapses_handles() {
    let seg = CubicSegment::degenerate(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
    assert_eq!(seg.c1, seg.p1);
    assert_eq!(seg.c2, seg.p2);
    assert_eq!(seg.p1, Point::new(1.0, 2.0));
    assert_eq!(seg.p2, Point::new(3.0, 4.0));
}

#[test]
fn segment_maps_onto_kurbo_cubic() {
    let seg = CubicSegment {
        p1: Point::new(0.0, 0.0),
        c1: Point::new(1.0, 0.0),
        c2: Point::new(2.0, 1.0),
        p2: Point::new(3.0, 1.0),
    };
    let c: CubicBez = seg.into();
    assert_eq!(c.p0, seg.p1);
    assert_eq!(c.p1, seg.c1);
    assert_eq!(c.p2, seg.c2);
    assert_eq!(c.p3, seg.p2);
}

#[test]
fn segment_serializes_points_as_pairs() {
    let seg = CubicSegment::degenerate(Point::new(0.0, 0.5), Point::new(2.0, 3.0));
    let v = serde_json::to_value(seg).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "p1": [0.0, 0.5], "c1": [0.0, 0.5], "c2": [2.0, 3.0], "p2": [2.0, 3.0] })
    );
    let back: CubicSegment = serde_json::from_value(v).unwrap();
    assert_eq!(back, seg);
}

#[test]
fn non_finite_coordinates_are_detected() {
    let mut seg = CubicSegment::degenerate(Point::ZERO, Point::new(1.0, 1.0));
    assert!(seg.is_finite());
    seg.c2 = Point::new(f64::NAN, 0.0);
    assert!(!seg.is_finite());
}

#[test]
fn stroke_id_displays_bare_integer() {
    assert_eq!(StrokeId(42).to_string(), "42");
    assert!(StrokeId(1) < StrokeId(2));
}
