use inkline::{EventLog, GestureTrace, Recorder, replay};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/two_strokes.json");
    let trace = GestureTrace::from_json_str(s)?;

    let mut rec = Recorder::with_listener(trace.recorder_config(), EventLog::new());
    let strokes = replay(&trace, &mut rec);

    for ev in rec.listener().events() {
        println!("{:?} stroke {}: {} control points", ev.kind, ev.id, ev.control_points.len());
    }
    for stroke in strokes.iter().filter(|s| !s.is_empty()) {
        println!("stroke {}: {}", stroke.id(), stroke.d());
    }

    Ok(())
}
