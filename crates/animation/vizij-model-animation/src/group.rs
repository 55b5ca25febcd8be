//! Capability traits for engine-owned animation groups.
//!
//! The rendering engine owns keyframe evaluation, timing and the update loop.
//! Adapters implement [`AnimationGroup`] over the engine's group object and hand
//! it to [`crate::GroupModelAnimation`]; the facade only ever talks to the
//! engine through these traits.

use serde::{Deserialize, Serialize};

/// A single key in a targeted animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: f32,
    pub value: f32,
}

/// One keyframe track bound to a target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedAnimation {
    /// Engine-side target identifier (node name, bone path, ...).
    pub target: String,
    /// Keys ordered by frame.
    pub keys: Vec<Keyframe>,
}

impl TargetedAnimation {
    pub fn new(target: impl Into<String>, keys: Vec<Keyframe>) -> Self {
        Self {
            target: target.into(),
            keys,
        }
    }

    /// Frame of the last key, i.e. the track's length in frames.
    #[inline]
    pub fn last_frame(&self) -> Option<f32> {
        self.keys.last().map(|k| k.frame)
    }
}

/// Playback position of one running track inside an animatable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeAnimation {
    pub current_frame: f32,
    /// `None` when the engine has no rate for this track.
    pub frames_per_second: Option<f32>,
}

/// A live, running instance of one or more tracks.
pub trait Animatable {
    /// Running tracks in registration order.
    fn animations(&self) -> &[RuntimeAnimation];

    /// Jump every track of this animatable to `frame`. Range handling is up to
    /// the engine.
    fn go_to_frame(&mut self, frame: f32);
}

/// Playback controls of an animation group.
///
/// Split from [`AnimationGroup`] so the end listener can drive the group while
/// the engine is in the middle of its own update.
pub trait PlaybackControl {
    /// Play (or resume) with the given loop flag.
    fn play(&mut self, looping: bool);

    /// Start from the beginning with the given loop flag and speed ratio.
    fn start(&mut self, looping: bool, speed_ratio: f32);

    fn stop(&mut self);

    fn pause(&mut self);

    /// Return every target to its first frame.
    fn reset(&mut self);

    fn restart(&mut self);

    /// Whether the group is currently running.
    fn is_started(&self) -> bool;

    fn speed_ratio(&self) -> f32;

    fn set_speed_ratio(&mut self, ratio: f32);
}

/// Called by the engine when the group's animation reaches its end.
pub type EndListener = Box<dyn FnMut(&mut dyn PlaybackControl)>;

/// An engine-owned group of synchronised keyframe animations.
pub trait AnimationGroup: PlaybackControl {
    type Animatable: Animatable;

    fn name(&self) -> &str;

    fn targeted_animations(&self) -> &[TargetedAnimation];

    /// Currently running animatables in registration order.
    fn animatables(&self) -> &[Self::Animatable];

    fn animatables_mut(&mut self) -> &mut [Self::Animatable];

    /// Register the end-of-animation listener. The engine invokes it
    /// synchronously from its update, passing itself as the control surface.
    fn on_animation_end(&mut self, listener: EndListener);

    /// Release engine resources held by the group.
    fn dispose(&mut self);
}
