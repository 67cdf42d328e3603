// Host-side tests for the CSS strings the widgets write each frame.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use motion_core::*;
use style::*;

#[test]
fn px_rounds_to_hundredths() {
    assert_eq!(px(10.0), "10.00px");
    assert_eq!(px(65.127), "65.13px");
    assert_eq!(px(-3.5), "-3.50px");
}

#[test]
fn px_never_prints_negative_zero() {
    assert_eq!(px(-0.0), "0.00px");
    assert_eq!(px(-0.001), "0.00px");
}

#[test]
fn resting_cursor_has_identity_rotation_and_scale() {
    let c = CursorFollower::default();
    let t = cursor_transform(&c.frame());
    assert_eq!(
        t,
        "translate3d(0.00px, 0.00px, 0) translate(-50%, -50%) rotate(0.00deg) scale(1.0000, 1.0000)"
    );
}

#[test]
fn moving_cursor_stretches_along_travel() {
    let mut c = CursorFollower::default();
    c.set_pointer(Vec2::new(100.0, 0.0));
    c.step();
    // 90px behind on the x axis
    let stretch = 90.0 * CURSOR_ELASTICITY;
    let t = cursor_transform(&c.frame());
    assert!(t.starts_with("translate3d(10.00px, 0.00px, 0)"), "{t}");
    assert!(t.contains("rotate(0.00deg)"), "{t}");
    assert!(
        t.ends_with(&format!("scale({:.4}, {:.4})", 1.0 + stretch, 1.0 - stretch)),
        "{t}"
    );
}

#[test]
fn downward_travel_rotates_ninety_degrees() {
    let mut c = CursorFollower::default();
    c.set_pointer(Vec2::new(0.0, 50.0));
    c.step();
    assert!(cursor_transform(&c.frame()).contains("rotate(90.00deg)"));
}

#[test]
fn lab_cursor_grows_with_pointer_speed() {
    let mut lab = SpeedSizer::default();
    lab.set_pointer(Vec2::new(10.0, 10.0));
    lab.step();
    assert_eq!(px(lab.diameter()), "60.00px");

    lab.set_pointer(Vec2::new(13.0, 14.0));
    lab.step();
    // 5px of travel in one frame
    assert_eq!(px(lab.diameter()), "80.00px");
    assert_eq!(
        lab_cursor_transform(lab.pointer().unwrap()),
        "translate3d(13.00px, 14.00px, 0) translate(-50%, -50%)"
    );

    lab.set_pointer(Vec2::new(500.0, 14.0));
    lab.step();
    assert_eq!(px(lab.diameter()), "160.00px");
}

#[test]
fn scroll_moves_content_up() {
    assert_eq!(scroll_transform(0.0), "translate3d(0, 0.00px, 0)");
    assert_eq!(scroll_transform(40.0), "translate3d(0, -40.00px, 0)");
}
