//! Typed configuration for the smoothing primitives.
//!
//! Every config has a `Default` built from [`crate::constants`] and a
//! `validate` method. Constructors that take a config clamp or fall back
//! instead of failing, so callers that read tunables from untrusted places
//! (element data attributes, for instance) should validate first and report.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lag factor {0} must be in (0, 1]")]
    LagOutOfRange(f32),
    #[error("viscosity {0} must be strictly between 0 and 1")]
    ViscosityOutOfRange(f32),
    #[error("elasticity {0} must be positive")]
    ElasticityOutOfRange(f32),
    #[error("elasticity {elasticity} diverges with viscosity {viscosity} (limit {limit})")]
    UnstableSpring {
        elasticity: f32,
        viscosity: f32,
        limit: f32,
    },
    #[error("bounds [{lower}, {upper}] are empty or inverted")]
    InvalidBounds { lower: f32, upper: f32 },
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("elapsed timing needs a non-zero reference frame")]
    ZeroReferenceFrame,
    #[error("unknown timing \"{0}\", expected \"frame\" or \"elapsed\"")]
    UnknownTiming(String),
}

fn finite(name: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(name))
    }
}

/// How a follower turns frames into progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Timing {
    /// One fixed step per display frame, regardless of frame duration.
    #[default]
    PerFrame,
    /// Scale the per-frame factor by elapsed time relative to `reference`.
    Elapsed { reference: Duration },
}

impl Timing {
    pub fn elapsed_at_60hz() -> Self {
        Timing::Elapsed {
            reference: Duration::from_secs_f32(REFERENCE_FRAME_SEC),
        }
    }
}

/// `"frame"` or `"elapsed"` (60 Hz reference), as written in markup.
impl std::str::FromStr for Timing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frame" => Ok(Timing::PerFrame),
            "elapsed" => Ok(Timing::elapsed_at_60hz()),
            other => Err(ConfigError::UnknownTiming(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagConfig {
    pub alpha: f32,
    pub timing: Timing,
}

impl LagConfig {
    pub fn per_frame(alpha: f32) -> Self {
        Self {
            alpha,
            timing: Timing::PerFrame,
        }
    }

    pub fn cursor() -> Self {
        Self::per_frame(CURSOR_LAG)
    }

    pub fn scroll() -> Self {
        Self::per_frame(SCROLL_LAG)
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("alpha", self.alpha)?;
        if self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ConfigError::LagOutOfRange(self.alpha));
        }
        if let Timing::Elapsed { reference } = self.timing {
            if reference.is_zero() {
                return Err(ConfigError::ZeroReferenceFrame);
            }
        }
        Ok(())
    }
}

impl Default for LagConfig {
    fn default() -> Self {
        Self::cursor()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchConfig {
    /// Stretch added per unit of lag distance.
    pub elasticity: f32,
    /// Upper limit of the stretch factor; must stay below 1 so the minor
    /// axis keeps a positive scale.
    pub cap: f32,
}

impl StretchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("stretch elasticity", self.elasticity)?;
        finite("stretch cap", self.cap)?;
        if self.elasticity < 0.0 {
            return Err(ConfigError::ElasticityOutOfRange(self.elasticity));
        }
        if !(0.0..1.0).contains(&self.cap) {
            return Err(ConfigError::InvalidBounds {
                lower: 0.0,
                upper: self.cap,
            });
        }
        Ok(())
    }
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            elasticity: CURSOR_ELASTICITY,
            cap: CURSOR_STRETCH_CAP,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub elasticity: f32,
    pub viscosity: f32,
}

impl SpringConfig {
    /// Largest elasticity for which the per-frame update still decays.
    ///
    /// With `c = 1 - viscosity` the update on `(current - target, velocity)`
    /// is linear with trace `1 + c - c*k` and determinant `c`. The Jury
    /// conditions reduce to `k < 2 (1 + c) / c`.
    pub fn elasticity_limit(viscosity: f32) -> f32 {
        let c = 1.0 - viscosity;
        2.0 * (1.0 + c) / c
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("elasticity", self.elasticity)?;
        finite("viscosity", self.viscosity)?;
        if self.viscosity <= 0.0 || self.viscosity >= 1.0 {
            return Err(ConfigError::ViscosityOutOfRange(self.viscosity));
        }
        if self.elasticity <= 0.0 {
            return Err(ConfigError::ElasticityOutOfRange(self.elasticity));
        }
        let limit = Self::elasticity_limit(self.viscosity);
        if self.elasticity >= limit {
            return Err(ConfigError::UnstableSpring {
                elasticity: self.elasticity,
                viscosity: self.viscosity,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            elasticity: DRAWER_ELASTICITY,
            viscosity: DRAWER_VISCOSITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    pub spring: SpringConfig,
    pub collapsed: f32,
    pub expanded: f32,
    pub margin_below: f32,
    pub margin_above: f32,
    pub reveal_threshold: f32,
}

impl DrawerConfig {
    /// Same overshoot allowance on both ends.
    pub fn with_overshoot_margin(mut self, margin: f32) -> Self {
        self.margin_below = margin;
        self.margin_above = margin;
        self
    }

    pub fn lower_bound(&self) -> f32 {
        self.collapsed - self.margin_below
    }

    pub fn upper_bound(&self) -> f32 {
        self.expanded + self.margin_above
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spring.validate()?;
        finite("collapsed", self.collapsed)?;
        finite("expanded", self.expanded)?;
        finite("margin below", self.margin_below)?;
        finite("margin above", self.margin_above)?;
        finite("reveal threshold", self.reveal_threshold)?;
        if self.expanded <= self.collapsed || self.margin_below < 0.0 || self.margin_above < 0.0
        {
            return Err(ConfigError::InvalidBounds {
                lower: self.lower_bound(),
                upper: self.upper_bound(),
            });
        }
        Ok(())
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            collapsed: DRAWER_COLLAPSED_PX,
            expanded: DRAWER_EXPANDED_PX,
            margin_below: DRAWER_MARGIN_BELOW_PX,
            margin_above: DRAWER_MARGIN_ABOVE_PX,
            reveal_threshold: DRAWER_REVEAL_THRESHOLD_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(LagConfig::cursor().validate(), Ok(()));
        assert_eq!(LagConfig::scroll().validate(), Ok(()));
        assert_eq!(StretchConfig::default().validate(), Ok(()));
        assert_eq!(DrawerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn lag_range_is_half_open() {
        assert_eq!(LagConfig::per_frame(1.0).validate(), Ok(()));
        assert_eq!(
            LagConfig::per_frame(0.0).validate(),
            Err(ConfigError::LagOutOfRange(0.0))
        );
        assert!(LagConfig::per_frame(1.5).validate().is_err());
        assert!(LagConfig::per_frame(f32::NAN).validate().is_err());
    }

    #[test]
    fn stiff_spring_is_rejected() {
        let limit = SpringConfig::elasticity_limit(0.15);
        let cfg = SpringConfig {
            elasticity: limit + 0.1,
            viscosity: 0.15,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnstableSpring { .. })
        ));
    }

    #[test]
    fn viscosity_must_be_open_interval() {
        for v in [0.0, 1.0, -0.2] {
            let cfg = SpringConfig {
                elasticity: 0.06,
                viscosity: v,
            };
            assert_eq!(cfg.validate(), Err(ConfigError::ViscosityOutOfRange(v)));
        }
    }

    #[test]
    fn inverted_drawer_heights_are_rejected() {
        let cfg = DrawerConfig {
            collapsed: 300.0,
            ..DrawerConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn timing_parses_from_markup() {
        assert_eq!("frame".parse::<Timing>(), Ok(Timing::PerFrame));
        assert_eq!(" Elapsed ".parse::<Timing>(), Ok(Timing::elapsed_at_60hz()));
        assert_eq!(
            "fast".parse::<Timing>(),
            Err(ConfigError::UnknownTiming("fast".into()))
        );
        let cfg = LagConfig::scroll().with_timing("elapsed".parse().unwrap());
        assert_eq!(cfg.alpha, SCROLL_LAG);
        assert_eq!(cfg.validate(), Ok(()));
    }
}
