use crate::foundation::core::{CubicSegment, Differential, Point, Vec2};

/// Centered-difference tangent estimate for every point.
///
/// `differential[i] = points[i + 1] - points[i - 1]`, with `points[i]` standing in for a
/// missing neighbor at either end. Fewer than two points yield an empty result.
pub fn compute_differentials(points: &[Point]) -> Vec<Differential> {
    if points.len() < 2 {
        return Vec::new();
    }
    (0..points.len())
        .map(|i| {
            let prev = if i == 0 { points[i] } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(points[i]);
            next - prev
        })
        .collect()
}

/// Scale `v` to length `a`; the zero vector stays zero.
pub fn normalize(a: f64, v: Vec2) -> Vec2 {
    let n = v.hypot();
    if n == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(a * v.x / n, a * v.y / n)
}

/// Fit one cubic segment per consecutive pair of `points`.
///
/// Handles sit on the tangent estimate of each anchor, a third of the chord length away.
/// `differentials` is used when it matches `points` in length and recomputed otherwise.
/// One or two points produce a single segment with collapsed handles.
pub fn interpolate(points: &[Point], differentials: Option<&[Differential]>) -> Vec<CubicSegment> {
    match points {
        [] => return Vec::new(),
        [only] => return vec![CubicSegment::degenerate(*only, *only)],
        [a, b] => return vec![CubicSegment::degenerate(*a, *b)],
        _ => {}
    }

    let computed;
    let diffs = match differentials {
        Some(d) if d.len() == points.len() => d,
        _ => {
            computed = compute_differentials(points);
            computed.as_slice()
        }
    };

    points
        .windows(2)
        .zip(diffs.windows(2))
        .map(|(p, d)| {
            let (p1, p2) = (p[0], p[1]);
            let third = (p2 - p1).hypot() / 3.0;
            CubicSegment {
                p1,
                c1: p1 + normalize(third, d[0]),
                c2: p2 - normalize(third, d[1]),
                p2,
            }
        })
        .collect()
}

/// Fit `committed` extended by an optional trailing `tip`, leaving `committed` untouched.
pub fn interpolate_with_tip(committed: &[Point], tip: Option<Point>) -> Vec<CubicSegment> {
    let Some(tip) = tip else {
        return interpolate(committed, None);
    };
    let mut extended = Vec::with_capacity(committed.len() + 1);
    extended.extend_from_slice(committed);
    extended.push(tip);
    interpolate(&extended, None)
}

#[cfg(test)]
#[path = "../../tests/unit/spline/fit.rs"]
mod tests;
