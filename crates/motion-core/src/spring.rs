//! Damped spring used by the project drawers.
//!
//! The update order is part of the feel and must stay as is: force from the
//! gap, velocity gains `force * elasticity`, velocity loses `viscosity` of
//! itself, position moves by velocity, then position is clamped. Overshoot
//! inside the clamp window is intended.

use crate::config::{DrawerConfig, SpringConfig};
use crate::scheduler::Animator;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Spring {
    current: f32,
    velocity: f32,
    target: f32,
    elasticity: f32,
    viscosity: f32,
    lower: f32,
    upper: f32,
}

impl Spring {
    /// A spring at rest at `initial`, clamped to `[lower, upper]`.
    ///
    /// Falls back to the default constants when `cfg` would not settle, and
    /// to an unbounded window when the bounds are inverted.
    pub fn new(initial: f32, cfg: SpringConfig, lower: f32, upper: f32) -> Self {
        let cfg = match cfg.validate() {
            Ok(()) => cfg,
            Err(e) => {
                log::warn!("[spring] {e}; using default constants");
                SpringConfig::default()
            }
        };
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            log::warn!("[spring] inverted bounds [{lower}, {upper}]; unbounded");
            (f32::NEG_INFINITY, f32::INFINITY)
        };
        let initial = if initial.is_finite() {
            initial.clamp(lower, upper)
        } else {
            0.0_f32.clamp(lower, upper)
        };
        Self {
            current: initial,
            velocity: 0.0,
            target: initial,
            elasticity: cfg.elasticity,
            viscosity: cfg.viscosity,
            lower,
            upper,
        }
    }

    /// Sets the rest point. The spring keeps its current velocity; it does
    /// not care why or how often the target changes.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn step(&mut self) {
        let force = self.target - self.current;
        let mut velocity = self.velocity + force * self.elasticity;
        velocity *= 1.0 - self.viscosity;
        let next = self.current + velocity;
        if !next.is_finite() || !velocity.is_finite() {
            self.velocity = 0.0;
            return;
        }
        self.velocity = velocity;
        self.current = next.clamp(self.lower, self.upper);
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.lower, self.upper)
    }

    /// Within `epsilon` of the target and nearly still.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.target - self.current).abs() <= epsilon && self.velocity.abs() <= epsilon
    }
}

impl Animator for Spring {
    fn advance(&mut self, _elapsed: Duration) {
        self.step();
    }
}

/// Hover intent for a drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Expand,
    Collapse,
}

/// A spring between a collapsed and an expanded height.
#[derive(Clone, Debug)]
pub struct Drawer {
    spring: Spring,
    cfg: DrawerConfig,
    intent: Intent,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(DrawerConfig::default())
    }
}

impl Drawer {
    pub fn new(cfg: DrawerConfig) -> Self {
        let cfg = match cfg.validate() {
            Ok(()) => cfg,
            Err(e) => {
                log::warn!("[drawer] {e}; using defaults");
                DrawerConfig::default()
            }
        };
        Self {
            spring: Spring::new(cfg.collapsed, cfg.spring, cfg.lower_bound(), cfg.upper_bound()),
            cfg,
            intent: Intent::Collapse,
        }
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
        let height = match intent {
            Intent::Expand => self.cfg.expanded,
            Intent::Collapse => self.cfg.collapsed,
        };
        self.spring.set_target(height);
    }

    /// Pointer entered the drawer.
    pub fn hover_enter(&mut self) {
        self.set_intent(Intent::Expand);
    }

    /// Pointer left the drawer.
    pub fn hover_leave(&mut self) {
        self.set_intent(Intent::Collapse);
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    #[inline]
    pub fn step(&mut self) {
        self.spring.step();
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.spring.current()
    }

    pub fn velocity(&self) -> f32 {
        self.spring.velocity()
    }

    /// Mostly open: secondary content may be revealed before the spring has
    /// finished settling.
    pub fn is_expanded(&self) -> bool {
        self.spring.current() > self.cfg.collapsed + self.cfg.reveal_threshold
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.cfg
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }
}

impl Animator for Drawer {
    fn advance(&mut self, _elapsed: Duration) {
        self.step();
    }
}
