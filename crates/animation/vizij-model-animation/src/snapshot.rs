//! Serialisable read-out of a model animation, for UI polling.

use serde::{Deserialize, Serialize};

use crate::state::{AnimationState, PlayMode};

/// Every inspectable property of a model animation at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSnapshot {
    pub name: String,
    pub state: AnimationState,
    pub play_mode: PlayMode,
    pub frames: f32,
    pub current_frame: f32,
    pub fps: f32,
    pub speed_ratio: f32,
}

impl AnimationSnapshot {
    /// Playback progress in [0, 1]; 0 for an animation with no frames.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.frames <= 0.0 {
            return 0.0;
        }
        (self.current_frame / self.frames).clamp(0.0, 1.0)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
