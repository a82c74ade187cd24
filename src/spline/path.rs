use std::fmt::Write as _;

use crate::foundation::core::{BezPath, CubicSegment, Point};

/// Serialize segments as an absolute move-to followed by one cubic curve-to per segment.
///
/// The shape is `M x y C cx1 cy1, cx2 cy2, x2 y2 C ...`; an empty input yields `""`.
pub fn to_path_command(segments: &[CubicSegment]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };

    let mut d = String::with_capacity(8 + segments.len() * 32);
    d.push_str("M ");
    push_pair(&mut d, first.p1);
    for seg in segments {
        d.push_str(" C ");
        push_pair(&mut d, seg.c1);
        d.push_str(", ");
        push_pair(&mut d, seg.c2);
        d.push_str(", ");
        push_pair(&mut d, seg.p2);
    }
    d
}

/// Build a kurbo path from the same segments `to_path_command` would serialize.
pub fn to_bez_path(segments: &[CubicSegment]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = segments.first() else {
        return path;
    };
    path.move_to(first.p1);
    for seg in segments {
        path.curve_to(seg.c1, seg.c2, seg.p2);
    }
    path
}

fn push_pair(out: &mut String, p: Point) {
    push_coord(out, p.x);
    out.push(' ');
    push_coord(out, p.y);
}

// Shortest round-trip decimal; `-0` prints as `0`.
fn push_coord(out: &mut String, v: f64) {
    let v = if v == 0.0 { 0.0 } else { v };
    let _ = write!(out, "{v}");
}

#[cfg(test)]
#[path = "../../tests/unit/spline/path.rs"]
mod tests;
