//! Physics cursor: a lagging follower that stretches along its motion.

use crate::config::{LagConfig, StretchConfig};
use crate::constants::*;
use crate::lag::LagFollower;
use crate::scheduler::Animator;
use crate::stretch::{stretch_pose, StretchPose};
use glam::Vec2;
use std::time::Duration;

/// Everything a renderer needs for one cursor frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub position: Vec2,
    pub pose: StretchPose,
    pub diameter: f32,
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    follower: LagFollower<Vec2>,
    stretch: StretchConfig,
    hovering: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(LagConfig::cursor(), StretchConfig::default())
    }
}

impl CursorFollower {
    pub fn new(lag: LagConfig, stretch: StretchConfig) -> Self {
        let stretch = match stretch.validate() {
            Ok(()) => stretch,
            Err(e) => {
                log::warn!("[cursor] {e}; using default stretch");
                StretchConfig::default()
            }
        };
        Self {
            follower: LagFollower::new(Vec2::ZERO, lag),
            stretch,
            hovering: false,
        }
    }

    /// Latest pointer position in viewport pixels.
    #[inline]
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.follower.set_target(pointer);
    }

    /// Whether the pointer is over a link, button or other interactable.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn step(&mut self) {
        self.follower.step();
    }

    pub fn position(&self) -> Vec2 {
        self.follower.current()
    }

    pub fn pose(&self) -> StretchPose {
        match self.follower.target() {
            Some(target) => stretch_pose(self.follower.current(), target, &self.stretch),
            None => StretchPose::IDENTITY,
        }
    }

    pub fn diameter(&self) -> f32 {
        if self.hovering {
            CURSOR_HOVER_DIAMETER_PX
        } else {
            CURSOR_DIAMETER_PX
        }
    }

    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            position: self.position(),
            pose: self.pose(),
            diameter: self.diameter(),
        }
    }
}

impl Animator for CursorFollower {
    fn advance(&mut self, elapsed: Duration) {
        self.follower.step_elapsed(elapsed);
    }
}

/// Grows a cursor with pointer speed, measured as travel per frame.
#[derive(Clone, Debug)]
pub struct SpeedSizer {
    base: f32,
    gain: f32,
    max_extra: f32,
    pointer: Option<Vec2>,
    last: Option<Vec2>,
    speed: f32,
}

impl Default for SpeedSizer {
    fn default() -> Self {
        Self::new(SPEED_SIZE_BASE_PX, SPEED_SIZE_GAIN, SPEED_SIZE_MAX_EXTRA_PX)
    }
}

impl SpeedSizer {
    pub fn new(base: f32, gain: f32, max_extra: f32) -> Self {
        Self {
            base,
            gain: gain.max(0.0),
            max_extra: max_extra.max(0.0),
            pointer: None,
            last: None,
            speed: 0.0,
        }
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        if pointer.is_finite() {
            self.pointer = Some(pointer);
        }
    }

    /// Samples travel since the previous frame.
    pub fn step(&mut self) {
        let Some(p) = self.pointer else {
            return;
        };
        self.speed = match self.last {
            Some(last) => p.distance(last),
            None => 0.0,
        };
        self.last = Some(p);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn diameter(&self) -> f32 {
        self.base + (self.speed * self.gain).min(self.max_extra)
    }
}

impl Animator for SpeedSizer {
    fn advance(&mut self, _elapsed: Duration) {
        self.step();
    }
}
