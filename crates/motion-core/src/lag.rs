//! Exponential-lag follower.
//!
//! Each frame the follower closes a fixed fraction `alpha` of the gap to its
//! target: `current <- current + alpha * (target - current)`. For a static
//! target the remaining error after `n` frames is `(1 - alpha)^n` of the
//! initial error, and the value never crosses the target.

use crate::config::{LagConfig, Timing};
use glam::Vec2;
use std::time::Duration;

/// Values that can be linearly interpolated by a follower.
pub trait Lerp: Copy {
    fn lerp_to(self, target: Self, alpha: f32) -> Self;
    fn distance_to(self, other: Self) -> f32;
    fn is_finite_value(self) -> bool;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, target: Self, alpha: f32) -> Self {
        self + alpha * (target - self)
    }

    #[inline]
    fn distance_to(self, other: Self) -> f32 {
        (other - self).abs()
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, target: Self, alpha: f32) -> Self {
        self + alpha * (target - self)
    }

    #[inline]
    fn distance_to(self, other: Self) -> f32 {
        self.distance(other)
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

/// Fraction of the gap to close after `elapsed`, given the per-frame factor
/// `alpha` measured at `reference` frame duration.
///
/// `1 - (1 - alpha)^(elapsed / reference)`; equals `alpha` when `elapsed ==
/// reference`.
#[inline]
pub fn alpha_for_elapsed(alpha: f32, elapsed: Duration, reference: Duration) -> f32 {
    if reference.is_zero() {
        return alpha;
    }
    let frames = elapsed.as_secs_f32() / reference.as_secs_f32();
    (1.0 - (1.0 - alpha).powf(frames)).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct LagFollower<T: Lerp> {
    current: T,
    target: Option<T>,
    alpha: f32,
    timing: Timing,
}

impl<T: Lerp> LagFollower<T> {
    /// Creates a follower resting at `initial` with no target yet.
    ///
    /// An out-of-range lag factor is clamped into (0, 1]; a zero elapsed-time
    /// reference falls back to per-frame timing.
    pub fn new(initial: T, cfg: LagConfig) -> Self {
        if let Err(e) = cfg.validate() {
            log::warn!("[lag] {e}; clamping");
        }
        let alpha = if cfg.alpha.is_finite() {
            cfg.alpha.clamp(f32::MIN_POSITIVE, 1.0)
        } else {
            1.0
        };
        let timing = match cfg.timing {
            Timing::Elapsed { reference } if reference.is_zero() => Timing::PerFrame,
            t => t,
        };
        Self {
            current: initial,
            target: None,
            alpha,
            timing,
        }
    }

    /// Records the latest input sample. Non-finite samples are ignored so a
    /// bad reading cannot poison every later frame.
    #[inline]
    pub fn set_target(&mut self, target: T) {
        if target.is_finite_value() {
            self.target = Some(target);
        }
    }

    /// Jumps to `value` and makes it the target.
    pub fn snap_to(&mut self, value: T) {
        if value.is_finite_value() {
            self.current = value;
            self.target = Some(value);
        }
    }

    /// One frame of smoothing. Holds `current` when there is no target.
    #[inline]
    pub fn step(&mut self) {
        self.approach(self.alpha);
    }

    /// Smoothing for a frame that lasted `elapsed`, honouring [`Timing`].
    pub fn step_elapsed(&mut self, elapsed: Duration) {
        let alpha = match self.timing {
            Timing::PerFrame => self.alpha,
            Timing::Elapsed { reference } => alpha_for_elapsed(self.alpha, elapsed, reference),
        };
        self.approach(alpha);
    }

    #[inline]
    fn approach(&mut self, alpha: f32) {
        if let Some(target) = self.target {
            let next = self.current.lerp_to(target, alpha);
            if next.is_finite_value() {
                self.current = next;
            }
        }
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Option<T> {
        self.target
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Distance left to the target, zero when there is none.
    pub fn gap(&self) -> f32 {
        self.target
            .map(|t| self.current.distance_to(t))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_without_target() {
        let mut f = LagFollower::new(5.0_f32, LagConfig::per_frame(0.5));
        for _ in 0..10 {
            f.step();
        }
        assert_eq!(f.current(), 5.0);
        assert_eq!(f.gap(), 0.0);
    }

    #[test]
    fn ignores_nan_samples() {
        let mut f = LagFollower::new(0.0_f32, LagConfig::per_frame(0.5));
        f.set_target(10.0);
        f.set_target(f32::NAN);
        f.step();
        assert_eq!(f.current(), 5.0);
        assert_eq!(f.target(), Some(10.0));
    }

    #[test]
    fn alpha_one_lands_on_target() {
        let mut f = LagFollower::new(Vec2::ZERO, LagConfig::per_frame(1.0));
        f.set_target(Vec2::new(3.0, -4.0));
        f.step();
        assert_eq!(f.current(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn invalid_alpha_is_clamped() {
        let f = LagFollower::new(0.0_f32, LagConfig::per_frame(2.0));
        assert_eq!(f.alpha(), 1.0);
        let f = LagFollower::new(0.0_f32, LagConfig::per_frame(-1.0));
        assert!(f.alpha() > 0.0);
    }

    #[test]
    fn elapsed_alpha_matches_per_frame_at_reference() {
        let r = Duration::from_millis(16);
        assert!((alpha_for_elapsed(0.1, r, r) - 0.1).abs() < 1e-6);
        // two reference frames in one step close as much as two single steps
        let two = alpha_for_elapsed(0.1, r * 2, r);
        assert!((two - (1.0 - 0.9_f32 * 0.9)).abs() < 1e-5);
    }
}
