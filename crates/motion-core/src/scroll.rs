use crate::config::LagConfig;
use crate::lag::LagFollower;
use crate::scheduler::Animator;
use std::time::Duration;

/// Lagging page offset. The page content is translated by `-offset()` while
/// the browser keeps scrolling a spacer of `content_height()`.
#[derive(Clone, Debug)]
pub struct ScrollFollower {
    follower: LagFollower<f32>,
    content_height: f32,
}

impl Default for ScrollFollower {
    fn default() -> Self {
        Self::new(LagConfig::scroll())
    }
}

impl ScrollFollower {
    pub fn new(cfg: LagConfig) -> Self {
        Self {
            follower: LagFollower::new(0.0, cfg),
            content_height: 0.0,
        }
    }

    #[inline]
    pub fn set_scroll(&mut self, offset: f32) {
        self.follower.set_target(offset);
    }

    /// Starts at `offset` without easing, e.g. when mounting mid-page.
    pub fn jump_to(&mut self, offset: f32) {
        self.follower.snap_to(offset);
    }

    #[inline]
    pub fn step(&mut self) {
        self.follower.step();
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.follower.current()
    }

    pub fn target(&self) -> Option<f32> {
        self.follower.target()
    }

    /// Records the measured content height. Returns `true` when it changed
    /// and the spacer needs resizing.
    pub fn set_content_height(&mut self, height: f32) -> bool {
        if !height.is_finite() || height < 0.0 || height == self.content_height {
            return false;
        }
        self.content_height = height;
        true
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }
}

impl Animator for ScrollFollower {
    fn advance(&mut self, elapsed: Duration) {
        self.follower.step_elapsed(elapsed);
    }
}
