//! Serialized pointer input and its replay through a recorder.

/// Trace document and event types.
pub mod gesture;
/// Replay of a trace into a [`crate::Recorder`].
pub mod replay;
