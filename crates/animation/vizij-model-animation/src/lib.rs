//! Vizij Model Animation
//!
//! Play/pause/stop controls and state inspection over an animation group owned
//! by a rendering engine. Keyframe evaluation, timing and the update loop stay
//! in the engine; this crate tracks a playback label and a play mode on top.
//!
//! Adapters implement [`AnimationGroup`] for their engine and wrap it in a
//! [`GroupModelAnimation`]. Viewers drive it through [`ModelAnimation`].

pub mod config;
pub mod error;
pub mod facade;
pub mod group;
pub mod snapshot;
pub mod state;

pub use config::ModelAnimationConfig;
pub use error::AnimationError;
pub use facade::{GroupModelAnimation, ModelAnimation};
pub use group::{
    Animatable, AnimationGroup, EndListener, Keyframe, PlaybackControl, RuntimeAnimation,
    TargetedAnimation,
};
pub use snapshot::AnimationSnapshot;
pub use state::{AnimationState, PlayMode};

/// Model animation result type
pub type Result<T> = core::result::Result<T, AnimationError>;
