use crate::foundation::core::{Point, StrokeId, xy};
use crate::record::stroke::Stroke;

/// Lifecycle hooks invoked synchronously by a [`crate::Recorder`].
///
/// Ordering contract: for one stroke, `on_start_path` comes first, then zero or more
/// `on_draw_path` in sample order, then `on_discard_path` (empty strokes only) and finally
/// `on_end_path`. No call is deferred.
pub trait StrokeListener {
    /// A stroke was registered.
    fn on_start_path(&mut self, _stroke: &Stroke) {}
    /// A sample was committed or previewed and the path was refitted.
    fn on_draw_path(&mut self, _stroke: &Stroke) {}
    /// The stroke ended without control points; its surface element should be removed.
    fn on_discard_path(&mut self, _stroke: &Stroke) {}
    /// The stroke ended and is about to leave the recorder.
    fn on_end_path(&mut self, _stroke: &Stroke) {}
}

/// Listener that ignores every hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl StrokeListener for NoopListener {}

impl<L: StrokeListener + ?Sized> StrokeListener for &mut L {
    fn on_start_path(&mut self, stroke: &Stroke) {
        (**self).on_start_path(stroke);
    }
    fn on_draw_path(&mut self, stroke: &Stroke) {
        (**self).on_draw_path(stroke);
    }
    fn on_discard_path(&mut self, stroke: &Stroke) {
        (**self).on_discard_path(stroke);
    }
    fn on_end_path(&mut self, stroke: &Stroke) {
        (**self).on_end_path(stroke);
    }
}

type Hook<'a> = Box<dyn FnMut(&Stroke) + 'a>;

/// Closure-backed listener; unset hooks are no-ops.
#[derive(Default)]
pub struct Callbacks<'a> {
    start: Option<Hook<'a>>,
    draw: Option<Hook<'a>>,
    discard: Option<Hook<'a>>,
    end: Option<Hook<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start_path(mut self, f: impl FnMut(&Stroke) + 'a) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    pub fn on_draw_path(mut self, f: impl FnMut(&Stroke) + 'a) -> Self {
        self.draw = Some(Box::new(f));
        self
    }

    pub fn on_discard_path(mut self, f: impl FnMut(&Stroke) + 'a) -> Self {
        self.discard = Some(Box::new(f));
        self
    }

    pub fn on_end_path(mut self, f: impl FnMut(&Stroke) + 'a) -> Self {
        self.end = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("start", &self.start.is_some())
            .field("draw", &self.draw.is_some())
            .field("discard", &self.discard.is_some())
            .field("end", &self.end.is_some())
            .finish()
    }
}

impl StrokeListener for Callbacks<'_> {
    fn on_start_path(&mut self, stroke: &Stroke) {
        if let Some(f) = self.start.as_mut() {
            f(stroke);
        }
    }
    fn on_draw_path(&mut self, stroke: &Stroke) {
        if let Some(f) = self.draw.as_mut() {
            f(stroke);
        }
    }
    fn on_discard_path(&mut self, stroke: &Stroke) {
        if let Some(f) = self.discard.as_mut() {
            f(stroke);
        }
    }
    fn on_end_path(&mut self, stroke: &Stroke) {
        if let Some(f) = self.end.as_mut() {
            f(stroke);
        }
    }
}

/// Which lifecycle hook produced a [`StrokeEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeEventKind {
    Start,
    Draw,
    Discard,
    End,
}

/// Snapshot of a stroke taken when a hook fired.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StrokeEvent {
    pub kind: StrokeEventKind,
    pub id: StrokeId,
    /// Path string at the time of the hook.
    pub d: String,
    /// Committed control points at the time of the hook.
    #[serde(serialize_with = "xy::seq::serialize")]
    pub control_points: Vec<Point>,
}

/// In-memory listener for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<StrokeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured events in call order.
    pub fn events(&self) -> &[StrokeEvent] {
        &self.events
    }

    /// Events of one stroke, in call order.
    pub fn events_for(&self, id: StrokeId) -> impl Iterator<Item = &StrokeEvent> {
        self.events.iter().filter(move |e| e.id == id)
    }

    pub fn kinds(&self) -> Vec<StrokeEventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, kind: StrokeEventKind, stroke: &Stroke) {
        self.events.push(StrokeEvent {
            kind,
            id: stroke.id(),
            d: stroke.d().to_owned(),
            control_points: stroke.control_points().to_vec(),
        });
    }
}

impl StrokeListener for EventLog {
    fn on_start_path(&mut self, stroke: &Stroke) {
        self.push(StrokeEventKind::Start, stroke);
    }
    fn on_draw_path(&mut self, stroke: &Stroke) {
        self.push(StrokeEventKind::Draw, stroke);
    }
    fn on_discard_path(&mut self, stroke: &Stroke) {
        self.push(StrokeEventKind::Discard, stroke);
    }
    fn on_end_path(&mut self, stroke: &Stroke) {
        self.push(StrokeEventKind::End, stroke);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/record/listener.rs"]
mod tests;
