/// DOM wiring and timing constants for the web frontend.
///
/// Engine tuning (lag factors, spring constants, heights) lives in
/// `motion_core::constants`; this file only names the page hooks.
// Element hooks
pub const CURSOR_ELEMENT_ID: &str = "physics-cursor";
pub const LAB_CURSOR_ELEMENT_ID: &str = "lab-cursor";
pub const SCROLL_CONTAINER_ID: &str = "smooth-scroll";
pub const SCROLL_SPACER_ID: &str = "smooth-scroll-spacer";
pub const DRAWER_SELECTOR: &str = ".project-drawer";

// Anything matching this (or an <a>/<button>) grows the cursor
pub const INTERACTABLE_SELECTOR: &str = ".interactable";
pub const INTERACTABLE_TAGS: [&str; 2] = ["A", "BUTTON"];

// Class toggled on a drawer once it is open far enough to show its details
pub const DRAWER_EXPANDED_CLASS: &str = "is-expanded";

// Per-drawer overrides, read from data-* attributes
pub const DATA_ELASTICITY: &str = "elasticity";
pub const DATA_VISCOSITY: &str = "viscosity";
pub const DATA_COLLAPSED: &str = "collapsed";
pub const DATA_EXPANDED: &str = "expanded";
// "frame" (default) or "elapsed", on the cursor and scroll hooks
pub const DATA_TIMING: &str = "timing";

// The cursors only make sense with a mouse or trackpad
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

// Smooth scroll re-measures content this often, for late images and fonts
pub const HEIGHT_SYNC_INTERVAL_MS: i32 = 1000;
