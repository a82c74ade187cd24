use std::path::Path;
use std::time::Duration;

use crate::foundation::error::{InklineError, InklineResult};

/// Commit thresholds for a [`crate::Recorder`].
///
/// JSON form: `{ "recording_interval_ms": 50, "min_recording_distance": 5 }`, both keys
/// optional.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RecorderConfig {
    /// Minimum time between two commits.
    #[serde(rename = "recording_interval_ms", with = "millis")]
    pub recording_interval: Duration,
    /// Minimum distance from the last committed point for a timed commit.
    pub min_recording_distance: f64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            recording_interval: Duration::from_millis(50),
            min_recording_distance: 5.0,
        }
    }
}

impl RecorderConfig {
    /// Build a config from a millisecond interval, rejecting values a `Duration` cannot hold.
    pub fn from_millis(interval_ms: f64, min_recording_distance: f64) -> InklineResult<Self> {
        let cfg = Self {
            recording_interval: millis::to_duration(interval_ms)
                .map_err(InklineError::validation)?,
            min_recording_distance,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject thresholds the recorder would misbehave on.
    ///
    /// The recorder never calls this itself; adapters loading untrusted config should.
    pub fn validate(&self) -> InklineResult<()> {
        if !self.min_recording_distance.is_finite() {
            return Err(InklineError::validation(
                "min_recording_distance must be finite",
            ));
        }
        if self.min_recording_distance < 0.0 {
            return Err(InklineError::validation(
                "min_recording_distance must be >= 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> InklineResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| InklineError::serde(format!("invalid recorder config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> InklineResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| InklineError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }
}

/// Serde adapter: `Duration` as (possibly fractional) milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn to_duration(ms: f64) -> Result<Duration, String> {
        if !ms.is_finite() {
            return Err("recording_interval_ms must be finite".to_string());
        }
        if ms < 0.0 {
            return Err("recording_interval_ms must be >= 0".to_string());
        }
        let nanos = (ms * 1e6).round();
        if nanos >= u64::MAX as f64 {
            return Err("recording_interval_ms out of range".to_string());
        }
        Ok(Duration::from_nanos(nanos as u64))
    }

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_nanos() as f64 / 1e6)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        to_duration(ms).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/record/config.rs"]
mod tests;
