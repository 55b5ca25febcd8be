//! Error types for model animation control

use serde::{Deserialize, Serialize};

/// Failures surfaced by the facade.
///
/// None of these leave the facade in a broken state: the playback label is
/// simply not advanced and the caller may retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// The group did not report itself running after a start request
    #[error("Animation group '{name}' did not start")]
    NotStarted { name: String },

    /// The group still reports itself running after a stop request
    #[error("Animation group '{name}' is still running after stop")]
    StillRunning { name: String },

    /// Configuration could not be parsed
    #[error("Invalid model animation config: {reason}")]
    InvalidConfig { reason: String },
}

impl AnimationError {
    /// Check if retrying the same call can succeed
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotStarted { .. } | Self::StillRunning { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotStarted { .. } | Self::StillRunning { .. } => "playback",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
