use std::collections::HashMap;

use crate::foundation::core::{Point, StrokeId};
use crate::record::listener::StrokeListener;
use crate::record::recorder::{Recorder, SampleOpts};
use crate::record::stroke::Stroke;
use crate::trace::gesture::{GestureEvent, GestureTrace, sample_time};

/// Drive `recorder` with every event of `trace`, in order.
///
/// Stroke keys are local to the trace. Restarting an active key ends its stroke first;
/// samples and ends on keys that are not active are ignored. Strokes left open when the
/// trace runs out are ended in key-start order. Returns the finished strokes in end order.
#[tracing::instrument(skip_all, fields(events = trace.events.len()))]
pub fn replay<L: StrokeListener>(trace: &GestureTrace, recorder: &mut Recorder<L>) -> Vec<Stroke> {
    let mut active: HashMap<&str, StrokeId> = HashMap::new();
    let mut finished = Vec::new();

    for ev in &trace.events {
        match ev {
            GestureEvent::Start { stroke } => {
                if let Some(prev) = active.remove(stroke.as_str()) {
                    tracing::debug!(key = %stroke, "restart of active stroke key");
                    finished.extend(recorder.end_stroke(prev));
                }
                let id = recorder.start_stroke().id();
                active.insert(stroke.as_str(), id);
            }
            GestureEvent::Sample {
                stroke,
                x,
                y,
                t_ms,
                force,
            } => {
                let Some(&id) = active.get(stroke.as_str()) else {
                    tracing::debug!(key = %stroke, "sample for inactive stroke key ignored");
                    continue;
                };
                recorder.record_sample_at(
                    id,
                    Point::new(*x, *y),
                    sample_time(*t_ms),
                    SampleOpts { force: *force },
                );
            }
            GestureEvent::End { stroke } => {
                if let Some(id) = active.remove(stroke.as_str()) {
                    finished.extend(recorder.end_stroke(id));
                }
            }
        }
    }

    let mut dangling: Vec<StrokeId> = active.into_values().collect();
    dangling.sort();
    for id in dangling {
        finished.extend(recorder.end_stroke(id));
    }
    finished
}

#[cfg(test)]
#[path = "../../tests/unit/trace/replay.rs"]
mod tests;
