// Tuning constants shared by the engine defaults and the web frontend.

// Cursor follower
pub const CURSOR_LAG: f32 = 0.1; // fraction of the pointer gap closed per frame
pub const CURSOR_ELASTICITY: f32 = 0.00161; // stretch per pixel of lag
pub const CURSOR_STRETCH_CAP: f32 = 0.5; // max axis stretch (scale 1.5 x 0.5)
pub const CURSOR_DIAMETER_PX: f32 = 40.0;
pub const CURSOR_HOVER_DIAMETER_PX: f32 = 80.0; // over links, buttons, .interactable

// Speed-reactive cursor sizing
pub const SPEED_SIZE_BASE_PX: f32 = 60.0;
pub const SPEED_SIZE_GAIN: f32 = 4.0; // px of growth per px/frame of pointer travel
pub const SPEED_SIZE_MAX_EXTRA_PX: f32 = 100.0;

// Smooth scroll
pub const SCROLL_LAG: f32 = 0.08;

// Spring drawer
pub const DRAWER_ELASTICITY: f32 = 0.06; // spring stiffness per frame
pub const DRAWER_VISCOSITY: f32 = 0.15; // fraction of velocity removed per frame
pub const DRAWER_COLLAPSED_PX: f32 = 80.0;
pub const DRAWER_EXPANDED_PX: f32 = 280.0;
pub const DRAWER_MARGIN_BELOW_PX: f32 = 5.0; // allowed undershoot under collapsed
pub const DRAWER_MARGIN_ABOVE_PX: f32 = 15.0; // allowed overshoot over expanded
pub const DRAWER_REVEAL_THRESHOLD_PX: f32 = 40.0; // above collapsed => secondary content shown

// Reference frame used to convert per-frame factors to elapsed-time factors
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;

// Gaps smaller than this are treated as a zero-length lag vector
pub const ZERO_GAP_EPSILON: f32 = f32::EPSILON;
