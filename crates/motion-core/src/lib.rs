//! Smoothing primitives behind the site's cursor, scroll and drawer motion.
//!
//! Nothing in here touches the DOM; the web frontend feeds input samples in
//! through `set_*` calls, drives one [`scheduler::FrameLoop`] per widget and
//! reads the smoothed values back out each frame.

pub mod config;
pub mod constants;
pub mod cursor;
pub mod lag;
pub mod scheduler;
pub mod scroll;
pub mod spring;
pub mod stretch;

pub use config::*;
pub use constants::*;
pub use cursor::{CursorFollower, CursorFrame, SpeedSizer};
pub use lag::{alpha_for_elapsed, LagFollower, Lerp};
pub use scheduler::{Animator, FrameHandle, FrameHost, FrameLoop, LoopState, ManualHost, Ticker};
pub use scroll::ScrollFollower;
pub use spring::{Drawer, Intent, Spring};
pub use stretch::{stretch_pose, StretchPose};
