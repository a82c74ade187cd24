//! Incremental stroke recording on top of the spline fitter.

/// Commit thresholds and their JSON form.
pub mod config;
/// Lifecycle hooks and built-in listeners.
pub mod listener;
/// The stroke table and commit/preview state machine.
pub mod recorder;
/// Per-stroke record.
pub mod stroke;
