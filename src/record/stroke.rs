use std::time::Duration;

use crate::foundation::core::{BezPath, CubicSegment, Point, StrokeId, xy};
use crate::spline::path::to_bez_path;

/// One in-progress gesture owned by a [`crate::Recorder`].
///
/// Read-only outside the recorder; every mutation goes through recorder methods.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    #[serde(serialize_with = "xy::seq::serialize")]
    pub(crate) control_points: Vec<Point>,
    #[serde(serialize_with = "xy::opt::serialize")]
    pub(crate) current_point: Option<Point>,
    #[serde(skip)]
    pub(crate) last_recorded: Option<Duration>,
    pub(crate) segments: Vec<CubicSegment>,
    pub(crate) d: String,
}

impl Stroke {
    pub(crate) fn new(id: StrokeId) -> Self {
        Self {
            id,
            control_points: Vec::new(),
            current_point: None,
            last_recorded: None,
            segments: Vec::new(),
            d: String::new(),
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Committed control points in sample order.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Most recent raw sample, committed or not.
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    /// Recorder-relative time of the last commit.
    pub fn last_recorded(&self) -> Option<Duration> {
        self.last_recorded
    }

    /// Segments of the latest fit, including any preview tip.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Serialized path string of [`Self::segments`].
    pub fn d(&self) -> &str {
        &self.d
    }

    /// True when nothing was committed; such a stroke leaves no mark.
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    pub fn to_bez_path(&self) -> BezPath {
        to_bez_path(&self.segments)
    }
}
