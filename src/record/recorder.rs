use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::foundation::core::{Point, StrokeId};
use crate::record::config::RecorderConfig;
use crate::record::listener::{NoopListener, StrokeListener};
use crate::record::stroke::Stroke;
use crate::spline::fit::interpolate_with_tip;
use crate::spline::path::to_path_command;

/// Per-sample options for [`Recorder::record_sample`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleOpts {
    /// Commit the sample regardless of the time and distance thresholds.
    pub force: bool,
}

impl SampleOpts {
    pub fn forced() -> Self {
        Self { force: true }
    }
}

/// Commit decision for one incoming sample.
///
/// Grouping is `(force || no history || nothing committed) || (interval elapsed && far
/// enough)`. Boundaries are inclusive on both thresholds.
pub fn should_commit(
    cfg: &RecorderConfig,
    force: bool,
    last_recorded: Option<Duration>,
    last_point: Option<Point>,
    point: Point,
    now: Duration,
) -> bool {
    let (Some(last_at), Some(last_point)) = (last_recorded, last_point) else {
        return true;
    };
    if force {
        return true;
    }
    let elapsed = now.saturating_sub(last_at);
    elapsed >= cfg.recording_interval && point.distance(last_point) >= cfg.min_recording_distance
}

/// Stateful controller turning streamed samples into smoothed strokes.
///
/// Owns every active [`Stroke`]; strokes are addressed by [`StrokeId`] and leave the
/// recorder on [`Recorder::end_stroke`]. Calls on unknown ids are ignored.
///
/// The host serializes calls; there is no internal locking.
pub struct Recorder<L: StrokeListener = NoopListener> {
    config: RecorderConfig,
    listener: L,
    strokes: BTreeMap<StrokeId, Stroke>,
    next_id: u64,
    origin: Instant,
}

impl Recorder<NoopListener> {
    pub fn new(config: RecorderConfig) -> Self {
        Self::with_listener(config, NoopListener)
    }
}

impl Default for Recorder<NoopListener> {
    fn default() -> Self {
        Self::new(RecorderConfig::default())
    }
}

impl<L: StrokeListener> Recorder<L> {
    pub fn with_listener(config: RecorderConfig, listener: L) -> Self {
        Self {
            config,
            listener,
            strokes: BTreeMap::new(),
            next_id: 0,
            origin: Instant::now(),
        }
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Drop the recorder (and any still-active strokes) and hand back the listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Time elapsed since the recorder was created, on the monotonic clock.
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    pub fn stroke(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.get(&id)
    }

    pub fn is_active(&self, id: StrokeId) -> bool {
        self.strokes.contains_key(&id)
    }

    /// Ids of active strokes, ascending.
    pub fn active_ids(&self) -> Vec<StrokeId> {
        self.strokes.keys().copied().collect()
    }

    pub fn active_count(&self) -> usize {
        self.strokes.len()
    }

    /// Register a new empty stroke under a fresh id and announce it.
    pub fn start_stroke(&mut self) -> &Stroke {
        self.next_id += 1;
        let id = StrokeId(self.next_id);
        tracing::debug!(%id, "start stroke");

        let stroke = self.strokes.entry(id).or_insert_with(|| Stroke::new(id));
        self.listener.on_start_path(stroke);
        stroke
    }

    /// Feed one sample, timestamped with the recorder clock.
    pub fn record_sample(&mut self, id: StrokeId, point: Point, opts: SampleOpts) {
        let now = self.now();
        self.record_sample_at(id, point, now, opts);
    }

    /// Feed one sample taken at `at` (recorder-relative).
    ///
    /// Either commits `point` as a control point or previews it as the tip of the curve;
    /// both refit the stroke and fire `on_draw_path`.
    pub fn record_sample_at(&mut self, id: StrokeId, point: Point, at: Duration, opts: SampleOpts) {
        let Some(stroke) = self.strokes.get_mut(&id) else {
            tracing::debug!(%id, "sample for unknown stroke ignored");
            return;
        };

        let commit = should_commit(
            &self.config,
            opts.force,
            stroke.last_recorded,
            stroke.control_points.last().copied(),
            point,
            at,
        );

        let tip = if commit {
            stroke.control_points.push(point);
            stroke.last_recorded = Some(at);
            tracing::trace!(%id, x = point.x, y = point.y, n = stroke.control_points.len(), "commit");
            None
        } else {
            tracing::trace!(%id, x = point.x, y = point.y, "preview");
            Some(point)
        };

        stroke.segments = interpolate_with_tip(&stroke.control_points, tip);
        stroke.d = to_path_command(&stroke.segments);
        stroke.current_point = Some(point);
        self.listener.on_draw_path(stroke);
    }

    /// Finish a stroke and remove it from the recorder.
    ///
    /// A trailing preview point is committed first. Strokes with no control points are
    /// reported through `on_discard_path` before `on_end_path`. Returns the final stroke, or
    /// `None` for an unknown id.
    pub fn end_stroke(&mut self, id: StrokeId) -> Option<Stroke> {
        let Some(mut stroke) = self.strokes.remove(&id) else {
            tracing::debug!(%id, "end for unknown stroke ignored");
            return None;
        };

        if let (Some(last), Some(current)) =
            (stroke.control_points.last().copied(), stroke.current_point)
            && last != current
        {
            stroke.control_points.push(current);
            stroke.segments = interpolate_with_tip(&stroke.control_points, None);
            stroke.d = to_path_command(&stroke.segments);
        }

        tracing::debug!(%id, n = stroke.control_points.len(), "end stroke");
        if stroke.is_empty() {
            self.listener.on_discard_path(&stroke);
        }
        self.listener.on_end_path(&stroke);
        Some(stroke)
    }
}

impl<L: StrokeListener> std::fmt::Debug for Recorder<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("config", &self.config)
            .field("active", &self.strokes.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/record/recorder.rs"]
mod tests;
