use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

fn zigzag() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(20.0, -3.0),
        Point::new(32.0, 8.0),
        Point::new(41.0, 2.0),
    ]
}

#[test]
fn differentials_use_self_at_boundaries() {
    let pts = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    let d = compute_differentials(&pts);
    assert_eq!(d, vec![Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0), Vec2::new(0.0, 4.0)]);
}

#[test]
fn differentials_of_short_input_are_empty() {
    assert!(compute_differentials(&[]).is_empty());
    assert!(compute_differentials(&[Point::new(1.0, 1.0)]).is_empty());
    assert_eq!(compute_differentials(&[Point::ZERO, Point::new(2.0, 1.0)]).len(), 2);
}

#[test]
fn normalize_scales_to_requested_length() {
    let v = normalize(10.0, Vec2::new(3.0, 4.0));
    assert!((v.x - 6.0).abs() < 1e-12);
    assert!((v.y - 8.0).abs() < 1e-12);
}

#[test]
fn normalize_of_zero_vector_is_zero() {
    assert_eq!(normalize(5.0, Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn empty_input_fits_nothing() {
    assert!(interpolate(&[], None).is_empty());
}

#[test]
fn one_or_two_points_fit_one_collapsed_segment() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(4.0, 6.0);

    let single = interpolate(&[a], None);
    assert_eq!(single, vec![CubicSegment::degenerate(a, a)]);

    let pair = interpolate(&[a, b], None);
    assert_eq!(pair.len(), 1);
    assert_eq!(pair[0].c1, pair[0].p1);
    assert_eq!(pair[0].c2, pair[0].p2);
    assert_eq!(pair[0].p1, a);
    assert_eq!(pair[0].p2, b);
}

#[test]
fn handles_sit_a_third_of_the_chord_along_the_tangent() {
    let pts = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
    let segs = interpolate(&pts, None);
    assert_eq!(segs.len(), 2);

    assert!(close(segs[0].c1, Point::new(1.0, 0.0)));
    assert!(close(segs[0].c2, Point::new(2.4, -0.8)));
    assert!(close(segs[1].c1, Point::new(3.8, 16.0 / 15.0)));
    assert!(close(segs[1].c2, Point::new(3.0, 8.0 / 3.0)));
}

#[test]
fn segments_chain_through_every_control_point() {
    let pts = zigzag();
    let segs = interpolate(&pts, None);
    assert_eq!(segs.len(), pts.len() - 1);
    for (i, seg) in segs.iter().enumerate() {
        assert_eq!(seg.p1, pts[i]);
        assert_eq!(seg.p2, pts[i + 1]);
    }
    for w in segs.windows(2) {
        assert_eq!(w[0].p2, w[1].p1);
    }
}

#[test]
fn explicit_differentials_match_default_path() {
    let pts = zigzag();
    let d = compute_differentials(&pts);
    assert_eq!(interpolate(&pts, Some(&d)), interpolate(&pts, None));
}

#[test]
fn mismatched_differentials_are_recomputed() {
    let pts = zigzag();
    let bogus = vec![Vec2::new(100.0, 100.0); 2];
    assert_eq!(interpolate(&pts, Some(&bogus)), interpolate(&pts, None));
}

#[test]
fn supplied_differentials_steer_the_handles() {
    let pts = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(6.0, 0.0)];
    let up = vec![Vec2::new(0.0, 1.0); 3];
    let segs = interpolate(&pts, Some(&up));
    assert!(close(segs[0].c1, Point::new(0.0, 1.0)));
    assert!(close(segs[0].c2, Point::new(3.0, -1.0)));
}

#[test]
fn coincident_neighbors_do_not_produce_nan() {
    let p = Point::new(5.0, 5.0);
    let pts = [p, p, p, Point::new(8.0, 9.0), Point::new(8.0, 9.0)];
    let segs = interpolate(&pts, None);
    assert_eq!(segs.len(), 4);
    assert!(segs.iter().all(|s| s.is_finite()));
    assert_eq!(segs[0], CubicSegment::degenerate(p, p));
}

#[test]
fn tip_extends_without_touching_committed_points() {
    let committed = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let tip = Point::new(20.0, 5.0);

    let preview = interpolate_with_tip(&committed, Some(tip));
    assert_eq!(committed.len(), 2);
    assert_eq!(preview, interpolate(&[committed[0], committed[1], tip], None));
    assert_eq!(preview.last().map(|s| s.p2), Some(tip));

    assert_eq!(interpolate_with_tip(&committed, None), interpolate(&committed, None));
}

#[test]
fn fitting_is_deterministic() {
    let pts = zigzag();
    assert_eq!(interpolate(&pts, None), interpolate(&pts, None));
}
