//! Droplet-style stretch derived from the lag vector.
//!
//! The pose is a pure function of `(current, target)` and is recomputed each
//! frame; nothing here is stored between frames.

use crate::config::StretchConfig;
use crate::constants::ZERO_GAP_EPSILON;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchPose {
    /// Direction of travel in degrees, `atan2(dy, dx)`.
    pub angle_deg: f32,
    /// Stretch factor in `[0, cap]`.
    pub stretch: f32,
}

impl StretchPose {
    pub const IDENTITY: Self = Self {
        angle_deg: 0.0,
        stretch: 0.0,
    };

    /// Non-uniform scale along the rotated axes: long along travel, thin across.
    #[inline]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(1.0 + self.stretch, 1.0 - self.stretch)
    }
}

impl Default for StretchPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

pub fn stretch_pose(current: Vec2, target: Vec2, cfg: &StretchConfig) -> StretchPose {
    let d = target - current;
    let dist = d.length();
    if !dist.is_finite() || dist <= ZERO_GAP_EPSILON {
        return StretchPose::IDENTITY;
    }
    let stretch = (dist * cfg.elasticity).min(cfg.cap).max(0.0);
    let angle_deg = d.y.atan2(d.x).to_degrees();
    StretchPose { angle_deg, stretch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gap_is_identity() {
        let p = Vec2::new(12.0, 7.5);
        let pose = stretch_pose(p, p, &StretchConfig::default());
        assert_eq!(pose, StretchPose::IDENTITY);
        assert_eq!(pose.scale(), Vec2::ONE);
        assert!(!pose.angle_deg.is_nan());
    }

    #[test]
    fn angle_follows_travel_direction() {
        let cfg = StretchConfig::default();
        let down = stretch_pose(Vec2::ZERO, Vec2::new(0.0, 10.0), &cfg);
        assert!((down.angle_deg - 90.0).abs() < 1e-4);
        let left = stretch_pose(Vec2::ZERO, Vec2::new(-10.0, 0.0), &cfg);
        assert!((left.angle_deg.abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn stretch_is_capped() {
        let cfg = StretchConfig::default();
        let far = stretch_pose(Vec2::ZERO, Vec2::new(10_000.0, 0.0), &cfg);
        assert_eq!(far.stretch, cfg.cap);
        assert_eq!(far.scale(), Vec2::new(1.5, 0.5));
        let near = stretch_pose(Vec2::ZERO, Vec2::new(100.0, 0.0), &cfg);
        assert!((near.stretch - 0.161).abs() < 1e-5);
    }

    #[test]
    fn non_finite_input_is_identity() {
        let cfg = StretchConfig::default();
        let pose = stretch_pose(Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0), &cfg);
        assert_eq!(pose, StretchPose::IDENTITY);
    }
}
