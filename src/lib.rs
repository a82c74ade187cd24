//! Inkline turns a stream of pointer samples into a smooth, incrementally redrawn curve.
//!
//! # Pipeline overview
//!
//! 1. **Record**: [`Recorder::record_sample`] decides whether a sample becomes a permanent
//!    control point (commit) or only the live tip of the curve (preview).
//! 2. **Fit**: [`interpolate`] maps control points to one [`CubicSegment`] per consecutive
//!    pair, with handles on a centered-difference tangent estimate.
//! 3. **Serialize**: [`to_path_command`] emits an SVG-compatible `M .. C ..` string, or
//!    [`to_bez_path`] a `kurbo::BezPath`.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never fails on input races**: operations on unknown stroke ids are silent no-ops.
//! - **Synchronous hooks**: [`StrokeListener`] hooks run inside the recorder call that caused
//!   them, in call order.
//! - **Single-threaded**: the host serializes calls; the recorder does no locking.
//!
//! ```
//! use inkline::{Point, Recorder, RecorderConfig, SampleOpts};
//! use std::time::Duration;
//!
//! let mut rec = Recorder::new(RecorderConfig::default());
//! let id = rec.start_stroke().id();
//! rec.record_sample_at(id, Point::new(0.0, 0.0), Duration::ZERO, SampleOpts::default());
//! rec.record_sample_at(id, Point::new(30.0, 10.0), Duration::from_millis(60), SampleOpts::default());
//! let stroke = rec.end_stroke(id).unwrap();
//! assert_eq!(stroke.d(), "M 0 0 C 0 0, 30 10, 30 10");
//! ```
#![forbid(unsafe_code)]

mod foundation;
mod record;
mod spline;
mod trace;

pub use foundation::core::{BezPath, CubicBez, CubicSegment, Differential, Point, StrokeId, Vec2};
pub use foundation::error::{InklineError, InklineResult};
pub use record::config::RecorderConfig;
pub use record::listener::{
    Callbacks, EventLog, NoopListener, StrokeEvent, StrokeEventKind, StrokeListener,
};
pub use record::recorder::{Recorder, SampleOpts, should_commit};
pub use record::stroke::Stroke;
pub use spline::fit::{compute_differentials, interpolate, interpolate_with_tip, normalize};
pub use spline::path::{to_bez_path, to_path_command};
pub use trace::gesture::{GestureEvent, GestureTrace};
pub use trace::replay::replay;
