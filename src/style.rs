// CSS values written by the widgets each frame. Kept free of web-sys so the
// strings can be checked on the host.

use glam::Vec2;
use motion_core::CursorFrame;

/// Formats a pixel length, never printing a negative zero.
#[inline]
pub fn px(v: f32) -> String {
    let v = (v * 100.0).round() / 100.0;
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.2}px", v)
}

/// Centered on the follower position, rotated toward travel and stretched
/// along it.
pub fn cursor_transform(frame: &CursorFrame) -> String {
    let scale = frame.pose.scale();
    format!(
        "translate3d({}, {}, 0) translate(-50%, -50%) rotate({:.2}deg) scale({:.4}, {:.4})",
        px(frame.position.x),
        px(frame.position.y),
        frame.pose.angle_deg,
        scale.x,
        scale.y
    )
}

/// Lab cursor: centered on the pointer, no rotation or stretch.
pub fn lab_cursor_transform(pointer: Vec2) -> String {
    format!(
        "translate3d({}, {}, 0) translate(-50%, -50%)",
        px(pointer.x),
        px(pointer.y)
    )
}

/// Content moves up by the smoothed offset.
pub fn scroll_transform(offset: f32) -> String {
    format!("translate3d(0, {}, 0)", px(-offset))
}
