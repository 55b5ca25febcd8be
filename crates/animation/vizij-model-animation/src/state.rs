//! Playback labels tracked locally by the facade.

use serde::{Deserialize, Serialize};

/// Playback state of a model animation.
///
/// Only the facade assigns this label; the engine reports running/not running
/// and the facade maps that onto one of these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    /// Never started, or reset by a play mode change.
    #[default]
    Init,
    /// The group reported itself running after `start`.
    Playing,
    /// `pause` was requested.
    Paused,
    /// The group reported itself idle after `stop`.
    Stopped,
    /// The group signalled the end of its animation.
    Ended,
}

impl AnimationState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Ended => "ended",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Whether a finished animation stops or loops back to its start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Once,
    #[default]
    Loop,
}

impl PlayMode {
    /// Loop flag handed to the engine's `play`/`start`.
    #[inline]
    pub fn is_loop(&self) -> bool {
        matches!(self, Self::Loop)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Loop => "loop",
        }
    }
}
