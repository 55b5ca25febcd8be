//! Playback facade over an engine-owned animation group.
//!
//! The engine does all the work; the facade keeps a small playback label and a
//! play mode flag, forwards each control call and derives the label from what
//! the group reports afterwards.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ModelAnimationConfig;
use crate::error::AnimationError;
use crate::group::{Animatable, AnimationGroup, PlaybackControl};
use crate::snapshot::AnimationSnapshot;
use crate::state::{AnimationState, PlayMode};
use crate::Result;

/// Playback surface exposed to viewers.
pub trait ModelAnimation {
    fn state(&self) -> AnimationState;

    fn name(&self) -> &str;

    /// Length of the animation in frames.
    fn frames(&self) -> f32;

    fn current_frame(&self) -> f32;

    fn fps(&self) -> f32;

    /// Frame of the first running track, or `None` when nothing runs.
    ///
    /// Unlike [`ModelAnimation::current_frame`] this tells a track sitting on
    /// frame 0 apart from an idle group.
    fn active_frame(&self) -> Option<f32>;

    fn speed_ratio(&self) -> f32;

    fn set_speed_ratio(&mut self, ratio: f32);

    fn play_mode(&self) -> PlayMode;

    fn set_play_mode(&mut self, mode: PlayMode);

    fn start(&mut self) -> Result<()>;

    fn stop(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn reset(&mut self);

    fn restart(&mut self);

    fn go_to_frame(&mut self, frame: f32);

    /// Release the underlying group. The animation cannot be used afterwards.
    fn dispose(self: Box<Self>);

    /// Read every inspectable property at once.
    fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            name: self.name().to_string(),
            state: self.state(),
            play_mode: self.play_mode(),
            frames: self.frames(),
            current_frame: self.current_frame(),
            fps: self.fps(),
            speed_ratio: self.speed_ratio(),
        }
    }
}

/// Stop the group and record `Stopped` if it actually went idle.
fn stop_group(
    group: &mut dyn PlaybackControl,
    state: &Cell<AnimationState>,
    name: &str,
) -> Result<()> {
    group.stop();
    if group.is_started() {
        log::warn!("model animation '{name}': group still running after stop");
        return Err(AnimationError::StillRunning {
            name: name.to_string(),
        });
    }
    transition(state, AnimationState::Stopped, name);
    Ok(())
}

/// Frame and rate reads skip zero and NaN entries.
#[inline]
fn is_reported(value: f32) -> bool {
    value != 0.0 && !value.is_nan()
}

fn transition(state: &Cell<AnimationState>, next: AnimationState, name: &str) {
    let prev = state.replace(next);
    if prev != next {
        log::debug!(
            "model animation '{name}': {} -> {}",
            prev.name(),
            next.name()
        );
    }
}

/// [`ModelAnimation`] backed by an [`AnimationGroup`].
pub struct GroupModelAnimation<G: AnimationGroup> {
    group: G,
    // Shared with the end listener registered on the group.
    state: Rc<Cell<AnimationState>>,
    play_mode: PlayMode,
}

impl<G: AnimationGroup> GroupModelAnimation<G> {
    /// Wrap `group` with default settings (looping, engine speed ratio).
    pub fn new(group: G) -> Self {
        Self::with_config(group, ModelAnimationConfig::default())
    }

    pub fn with_config(mut group: G, cfg: ModelAnimationConfig) -> Self {
        let state = Rc::new(Cell::new(AnimationState::Init));
        let name = group.name().to_string();

        if let Some(ratio) = cfg.speed_ratio {
            group.set_speed_ratio(ratio);
        }

        let listener_state = Rc::clone(&state);
        group.on_animation_end(Box::new(move |control: &mut dyn PlaybackControl| {
            // The outcome of stop is irrelevant here; the end overrides it.
            let _ = stop_group(control, &listener_state, &name);
            transition(&listener_state, AnimationState::Ended, &name);
        }));

        log::debug!(
            "model animation '{}': wrapped, play mode {}",
            group.name(),
            cfg.play_mode.name()
        );

        Self {
            group,
            state,
            play_mode: cfg.play_mode,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.get().is_playing()
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// Direct access to the group. Changes made here bypass the playback label.
    pub fn group_mut(&mut self) -> &mut G {
        &mut self.group
    }

    pub fn dispose(mut self) {
        log::debug!("model animation '{}': disposed", self.group.name());
        self.group.dispose();
    }
}

impl<G: AnimationGroup> ModelAnimation for GroupModelAnimation<G> {
    fn state(&self) -> AnimationState {
        self.state.get()
    }

    fn name(&self) -> &str {
        self.group.name()
    }

    fn frames(&self) -> f32 {
        let frames = self
            .group
            .targeted_animations()
            .iter()
            .filter_map(|t| t.last_frame())
            .reduce(f32::max)
            .unwrap_or(0.0);
        log::trace!("model animation '{}': frames {frames}", self.name());
        frames
    }

    fn current_frame(&self) -> f32 {
        let frame = self
            .group
            .animatables()
            .iter()
            .flat_map(|a| a.animations())
            .map(|anim| anim.current_frame)
            .find(|frame| is_reported(*frame))
            .unwrap_or(0.0);
        log::trace!("model animation '{}': current frame {frame}", self.name());
        frame
    }

    fn fps(&self) -> f32 {
        let fps = self
            .group
            .animatables()
            .iter()
            .flat_map(|a| a.animations())
            .filter_map(|anim| anim.frames_per_second)
            .find(|fps| is_reported(*fps))
            .unwrap_or(0.0);
        log::trace!("model animation '{}': fps {fps}", self.name());
        fps
    }

    fn active_frame(&self) -> Option<f32> {
        let frame = self
            .group
            .animatables()
            .iter()
            .flat_map(|a| a.animations())
            .map(|anim| anim.current_frame)
            .next();
        log::trace!("model animation '{}': active frame {frame:?}", self.name());
        frame
    }

    fn speed_ratio(&self) -> f32 {
        self.group.speed_ratio()
    }

    fn set_speed_ratio(&mut self, ratio: f32) {
        self.group.set_speed_ratio(ratio);
    }

    fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    fn set_play_mode(&mut self, mode: PlayMode) {
        if mode == self.play_mode {
            return;
        }
        self.play_mode = mode;
        log::debug!(
            "model animation '{}': play mode -> {}",
            self.group.name(),
            mode.name()
        );

        if self.state.get().is_playing() {
            self.group.play(mode.is_loop());
        } else {
            // Discards any paused position.
            self.group.reset();
            transition(&self.state, AnimationState::Init, self.group.name());
        }
    }

    fn start(&mut self) -> Result<()> {
        let ratio = self.group.speed_ratio();
        self.group.start(self.play_mode.is_loop(), ratio);
        if !self.group.is_started() {
            log::warn!(
                "model animation '{}': group did not start",
                self.group.name()
            );
            return Err(AnimationError::NotStarted {
                name: self.group.name().to_string(),
            });
        }
        transition(&self.state, AnimationState::Playing, self.group.name());
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        let name = self.group.name().to_string();
        stop_group(&mut self.group, &self.state, &name)
    }

    fn pause(&mut self) {
        self.group.pause();
        transition(&self.state, AnimationState::Paused, self.group.name());
    }

    fn reset(&mut self) {
        log::debug!("model animation '{}': reset", self.group.name());
        self.group.reset();
    }

    fn restart(&mut self) {
        log::debug!("model animation '{}': restart", self.group.name());
        self.group.restart();
    }

    fn go_to_frame(&mut self, frame: f32) {
        log::debug!(
            "model animation '{}': go to frame {frame}",
            self.group.name()
        );
        for animatable in self.group.animatables_mut() {
            animatable.go_to_frame(frame);
        }
    }

    fn dispose(self: Box<Self>) {
        GroupModelAnimation::dispose(*self);
    }
}

impl<G: AnimationGroup + std::fmt::Debug> std::fmt::Debug for GroupModelAnimation<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupModelAnimation")
            .field("group", &self.group)
            .field("state", &self.state.get())
            .field("play_mode", &self.play_mode)
            .finish()
    }
}
