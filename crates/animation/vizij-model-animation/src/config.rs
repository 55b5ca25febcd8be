//! Construction-time configuration for a model animation.

use serde::{Deserialize, Serialize};

use crate::state::PlayMode;

/// Settings applied when a facade is wrapped around a group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAnimationConfig {
    /// Initial play mode.
    pub play_mode: PlayMode,
    /// Speed ratio pushed to the group on construction. `None` keeps whatever
    /// the engine configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_ratio: Option<f32>,
}

impl ModelAnimationConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    #[inline]
    pub fn with_play_mode(mut self, mode: PlayMode) -> Self {
        self.play_mode = mode;
        self
    }

    #[inline]
    pub fn with_speed_ratio(mut self, ratio: f32) -> Self {
        self.speed_ratio = Some(ratio);
        self
    }
}
