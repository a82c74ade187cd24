use std::cell::RefCell;

use super::*;
use crate::record::config::RecorderConfig;
use crate::record::recorder::{Recorder, SampleOpts};

#[test]
fn noop_listener_accepts_every_hook() {
    let mut l = NoopListener;
    let s = Stroke::new(StrokeId(1));
    l.on_start_path(&s);
    l.on_draw_path(&s);
    l.on_discard_path(&s);
    l.on_end_path(&s);
}

#[test]
fn callbacks_fire_only_the_hooks_that_are_set() {
    let seen = RefCell::new(Vec::new());
    let mut cb = Callbacks::new()
        .on_start_path(|s| seen.borrow_mut().push(format!("start {}", s.id())))
        .on_end_path(|s| seen.borrow_mut().push(format!("end {}", s.id())));

    let s = Stroke::new(StrokeId(7));
    StrokeListener::on_start_path(&mut cb, &s);
    StrokeListener::on_draw_path(&mut cb, &s);
    StrokeListener::on_discard_path(&mut cb, &s);
    StrokeListener::on_end_path(&mut cb, &s);
    drop(cb);

    assert_eq!(seen.into_inner(), vec!["start 7", "end 7"]);
}

#[test]
fn callbacks_drive_a_recorder_like_an_adapter() {
    let drawn = RefCell::new(Vec::<String>::new());
    let removed = RefCell::new(Vec::<StrokeId>::new());
    let cb = Callbacks::new()
        .on_draw_path(|s| drawn.borrow_mut().push(s.d().to_owned()))
        .on_discard_path(|s| removed.borrow_mut().push(s.id()));

    let mut rec = Recorder::with_listener(RecorderConfig::default(), cb);
    let kept = rec.start_stroke().id();
    let empty = rec.start_stroke().id();
    rec.record_sample(kept, Point::new(2.0, 3.0), SampleOpts::default());
    rec.end_stroke(kept);
    rec.end_stroke(empty);
    drop(rec);

    assert_eq!(drawn.into_inner(), vec!["M 2 3 C 2 3, 2 3, 2 3".to_string()]);
    assert_eq!(removed.into_inner(), vec![empty]);
}

#[test]
fn event_log_snapshots_state_at_each_hook() {
    let mut rec = Recorder::with_listener(RecorderConfig::default(), EventLog::new());
    let id = rec.start_stroke().id();
    rec.record_sample_at(id, Point::new(0.0, 0.0), Default::default(), SampleOpts::default());
    rec.end_stroke(id);

    let log = rec.into_listener();
    let events: Vec<_> = log.events_for(id).collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].kind, StrokeEventKind::Start);
    assert!(events[0].control_points.is_empty());
    assert_eq!(events[1].kind, StrokeEventKind::Draw);
    assert_eq!(events[1].control_points, vec![Point::new(0.0, 0.0)]);
    assert_eq!(events[2].kind, StrokeEventKind::End);
}

#[test]
fn events_serialize_with_snake_case_kinds() {
    let ev = StrokeEvent {
        kind: StrokeEventKind::Discard,
        id: StrokeId(3),
        d: String::new(),
        control_points: vec![Point::new(1.0, 2.0)],
    };
    let v = serde_json::to_value(&ev).unwrap();
    assert_eq!(v["kind"], "discard");
    assert_eq!(v["id"], 3);
    assert_eq!(v["control_points"], serde_json::json!([[1.0, 2.0]]));
}
