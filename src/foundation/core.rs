use std::fmt;

pub use kurbo::{BezPath, CubicBez, Point, Vec2};

/// Estimated tangent vector at a control point.
pub type Differential = Vec2;

/// Identifier of a stroke, unique for the lifetime of the owning recorder.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct StrokeId(pub u64);

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cubic Bezier piece between two consecutive control points.
///
/// `p1`/`p2` are the anchors, `c1`/`c2` the handles. Points serialize as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicSegment {
    /// Start anchor.
    #[serde(with = "xy")]
    pub p1: Point,
    /// Handle leaving `p1`.
    #[serde(with = "xy")]
    pub c1: Point,
    /// Handle entering `p2`.
    #[serde(with = "xy")]
    pub c2: Point,
    /// End anchor.
    #[serde(with = "xy")]
    pub p2: Point,
}

impl CubicSegment {
    /// Segment from `a` to `b` with both handles collapsed onto the anchors.
    pub fn degenerate(a: Point, b: Point) -> Self {
        Self {
            p1: a,
            c1: a,
            c2: b,
            p2: b,
        }
    }

    pub fn to_cubic_bez(self) -> CubicBez {
        CubicBez::new(self.p1, self.c1, self.c2, self.p2)
    }

    pub fn is_finite(self) -> bool {
        [self.p1, self.c1, self.c2, self.p2]
            .iter()
            .all(|p| p.is_finite())
    }
}

impl From<CubicSegment> for CubicBez {
    fn from(seg: CubicSegment) -> Self {
        seg.to_cubic_bez()
    }
}

/// Serde adapter writing a [`Point`] as a two-element `[x, y]` array.
pub(crate) mod xy {
    use kurbo::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(crate) fn serialize<S: Serializer>(p: &Point, s: S) -> Result<S::Ok, S::Error> {
        [p.x, p.y].serialize(s)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(d)?;
        Ok(Point::new(x, y))
    }

    pub(crate) mod seq {
        use kurbo::Point;
        use serde::{Serializer, ser::SerializeSeq};

        pub(crate) fn serialize<S: Serializer>(pts: &[Point], s: S) -> Result<S::Ok, S::Error> {
            let mut seq = s.serialize_seq(Some(pts.len()))?;
            for p in pts {
                seq.serialize_element(&[p.x, p.y])?;
            }
            seq.end()
        }
    }

    pub(crate) mod opt {
        use kurbo::Point;
        use serde::{Serialize, Serializer};

        pub(crate) fn serialize<S: Serializer>(p: &Option<Point>, s: S) -> Result<S::Ok, S::Error> {
            p.map(|p| [p.x, p.y]).serialize(s)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
