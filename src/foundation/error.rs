/// Crate-wide result alias.
pub type InklineResult<T> = Result<T, InklineError>;

/// Errors raised at data boundaries (configuration, gesture traces, file IO).
///
/// Fitting and recording never fail: unknown stroke ids and degenerate geometry are
/// handled in place.
#[derive(thiserror::Error, Debug)]
pub enum InklineError {
    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InklineError {
    /// Build an [`InklineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InklineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`InklineError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
