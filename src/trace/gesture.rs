use std::path::Path;
use std::time::Duration;

use crate::foundation::error::{InklineError, InklineResult};
use crate::record::config::RecorderConfig;

/// One input event, already mapped into user space by whatever captured it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer went down; `stroke` names the gesture for later events.
    Start { stroke: String },
    /// Pointer moved while down.
    Sample {
        stroke: String,
        x: f64,
        y: f64,
        /// Capture time in milliseconds, relative to the start of the trace.
        t_ms: f64,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        force: bool,
    },
    /// Pointer went up.
    End { stroke: String },
}

impl GestureEvent {
    /// The trace-local stroke key this event addresses.
    pub fn stroke_key(&self) -> &str {
        match self {
            Self::Start { stroke } | Self::Sample { stroke, .. } | Self::End { stroke } => stroke,
        }
    }
}

/// A recorded input stream plus optional recorder thresholds.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GestureTrace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RecorderConfig>,
    pub events: Vec<GestureEvent>,
}

impl GestureTrace {
    pub fn from_json_str(s: &str) -> InklineResult<Self> {
        let trace: Self = serde_json::from_str(s)
            .map_err(|e| InklineError::serde(format!("invalid gesture trace: {e}")))?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn from_path(path: impl AsRef<Path>) -> InklineResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| InklineError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    /// Thresholds to replay with: the embedded config or the defaults.
    pub fn recorder_config(&self) -> RecorderConfig {
        self.config.unwrap_or_default()
    }

    /// Check coordinates and timestamps, and the embedded config if any.
    pub fn validate(&self) -> InklineResult<()> {
        if let Some(cfg) = &self.config {
            cfg.validate()?;
        }
        for (i, ev) in self.events.iter().enumerate() {
            if let GestureEvent::Sample { x, y, t_ms, .. } = ev {
                if !x.is_finite() || !y.is_finite() {
                    return Err(InklineError::validation(format!(
                        "event {i}: sample coordinates must be finite"
                    )));
                }
                if !t_ms.is_finite() || *t_ms < 0.0 {
                    return Err(InklineError::validation(format!(
                        "event {i}: t_ms must be finite and >= 0"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Sample time as a recorder-relative duration; callers validate `t_ms` first.
pub(crate) fn sample_time(t_ms: f64) -> Duration {
    Duration::from_nanos((t_ms.max(0.0) * 1e6).round() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/trace/gesture.rs"]
mod tests;
