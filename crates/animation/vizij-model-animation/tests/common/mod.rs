#![allow(dead_code)]
//! Scripted animation group used to drive the facade in tests.

use std::cell::Cell;
use std::rc::Rc;

use vizij_model_animation::{
    Animatable, AnimationGroup, EndListener, Keyframe, PlaybackControl, RuntimeAnimation,
    TargetedAnimation,
};

/// Every control call the facade issues, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Play(bool),
    Start(bool, f32),
    Stop,
    Pause,
    Reset,
    Restart,
    SetSpeed(f32),
    Dispose,
}

#[derive(Debug, Default)]
pub struct FakeAnimatable {
    pub animations: Vec<RuntimeAnimation>,
    pub jumps: Vec<f32>,
}

impl FakeAnimatable {
    pub fn at(frames: &[(f32, Option<f32>)]) -> Self {
        Self {
            animations: frames
                .iter()
                .map(|(current_frame, fps)| RuntimeAnimation {
                    current_frame: *current_frame,
                    frames_per_second: *fps,
                })
                .collect(),
            jumps: Vec::new(),
        }
    }
}

impl Animatable for FakeAnimatable {
    fn animations(&self) -> &[RuntimeAnimation] {
        &self.animations
    }

    fn go_to_frame(&mut self, frame: f32) {
        self.jumps.push(frame);
        for anim in &mut self.animations {
            anim.current_frame = frame;
        }
    }
}

pub struct FakeGroup {
    pub name: String,
    pub targeted: Vec<TargetedAnimation>,
    pub animatables: Vec<FakeAnimatable>,
    pub started: bool,
    pub speed: f32,
    pub calls: Vec<Call>,
    /// `start`/`play` leave the group idle.
    pub refuse_start: bool,
    /// `stop` leaves the group running.
    pub refuse_stop: bool,
    pub listeners: usize,
    pub disposed: Rc<Cell<bool>>,
    listener: Option<EndListener>,
}

impl FakeGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            targeted: Vec::new(),
            animatables: Vec::new(),
            started: false,
            speed: 1.0,
            calls: Vec::new(),
            refuse_start: false,
            refuse_stop: false,
            listeners: 0,
            disposed: Rc::new(Cell::new(false)),
            listener: None,
        }
    }

    pub fn with_track(mut self, target: &str, key_frames: &[f32]) -> Self {
        let keys = key_frames
            .iter()
            .map(|frame| Keyframe {
                frame: *frame,
                value: 0.0,
            })
            .collect();
        self.targeted.push(TargetedAnimation::new(target, keys));
        self
    }

    pub fn with_animatable(mut self, animatable: FakeAnimatable) -> Self {
        self.animatables.push(animatable);
        self
    }

    /// Simulate the engine reaching the end of the animation.
    pub fn fire_end(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            listener(self as &mut dyn PlaybackControl);
            self.listener = Some(listener);
        }
    }
}

impl PlaybackControl for FakeGroup {
    fn play(&mut self, looping: bool) {
        self.calls.push(Call::Play(looping));
        self.started = !self.refuse_start;
    }

    fn start(&mut self, looping: bool, speed_ratio: f32) {
        self.calls.push(Call::Start(looping, speed_ratio));
        self.speed = speed_ratio;
        self.started = !self.refuse_start;
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        if !self.refuse_stop {
            self.started = false;
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn reset(&mut self) {
        self.calls.push(Call::Reset);
    }

    fn restart(&mut self) {
        self.calls.push(Call::Restart);
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn speed_ratio(&self) -> f32 {
        self.speed
    }

    fn set_speed_ratio(&mut self, ratio: f32) {
        self.calls.push(Call::SetSpeed(ratio));
        self.speed = ratio;
    }
}

impl AnimationGroup for FakeGroup {
    type Animatable = FakeAnimatable;

    fn name(&self) -> &str {
        &self.name
    }

    fn targeted_animations(&self) -> &[TargetedAnimation] {
        &self.targeted
    }

    fn animatables(&self) -> &[FakeAnimatable] {
        &self.animatables
    }

    fn animatables_mut(&mut self) -> &mut [FakeAnimatable] {
        &mut self.animatables
    }

    fn on_animation_end(&mut self, listener: EndListener) {
        self.listeners += 1;
        self.listener = Some(listener);
    }

    fn dispose(&mut self) {
        self.calls.push(Call::Dispose);
        self.disposed.set(true);
    }
}

/// Two tracks ending on frames 30 and 60, one animatable at 30 fps.
pub fn walk_group() -> FakeGroup {
    FakeGroup::new("walk")
        .with_track("Hips", &[0.0, 15.0, 30.0])
        .with_track("Spine", &[0.0, 60.0])
        .with_animatable(FakeAnimatable::at(&[(0.0, Some(30.0))]))
}
