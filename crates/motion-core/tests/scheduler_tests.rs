// Host-side tests for the frame loop lifecycle, driven by ManualHost.

use glam::Vec2;
use motion_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn start_schedules_one_frame_and_each_frame_schedules_the_next() {
    let mut host = ManualHost::new();
    let mut fl = FrameLoop::new();
    assert_eq!(fl.state(), LoopState::Idle);
    assert!(fl.start(&mut host));
    assert!(!fl.start(&mut host));
    assert_eq!(host.pending_count(), 1);

    let mut updates = 0;
    for _ in 0..5 {
        let fired = host.take_frame();
        assert_eq!(fired.len(), 1);
        assert!(fl.on_frame(fired[0], &mut host, || updates += 1));
        assert_eq!(host.pending_count(), 1);
    }
    assert_eq!(updates, 5);
    assert_eq!(fl.frames(), 5);
}

#[test]
fn stop_twice_is_harmless() {
    let mut host = ManualHost::new();
    let mut fl = FrameLoop::new();
    fl.start(&mut host);
    fl.stop(&mut host);
    fl.stop(&mut host);
    assert_eq!(fl.state(), LoopState::Stopped);
    assert_eq!(host.pending_count(), 0);
    assert_eq!(host.cancelled(), 1);
}

#[test]
fn stop_before_start_leaves_nothing_pending() {
    let mut host = ManualHost::new();
    let mut fl = FrameLoop::new();
    fl.stop(&mut host);
    assert_eq!(host.pending_count(), 0);
    assert_eq!(host.cancelled(), 0);
    assert!(!fl.start(&mut host));
    assert_eq!(host.pending_count(), 0);
}

#[test]
fn callback_after_stop_does_nothing() {
    let mut host = ManualHost::new();
    let mut ticker = Ticker::new(Drawer::default());
    ticker.start(&mut host);
    ticker.animator_mut().hover_enter();

    // the host already handed out the frame when the widget is removed
    let late = host.take_frame();
    ticker.stop(&mut host);

    let before = ticker.animator().height();
    assert!(!ticker.on_frame(late[0], &mut host, FRAME));
    assert_eq!(ticker.animator().height(), before);
    assert_eq!(host.pending_count(), 0);
    assert_eq!(ticker.frame_loop().frames(), 0);
}

#[test]
fn stale_handle_is_ignored_while_running() {
    let mut host = ManualHost::new();
    let mut fl = FrameLoop::new();
    fl.start(&mut host);
    let first = host.take_frame()[0];
    assert!(fl.on_frame(first, &mut host, || {}));
    let mut ran = false;
    assert!(!fl.on_frame(first, &mut host, || ran = true));
    assert!(!ran);
    assert_eq!(host.pending_count(), 1);
}

#[test]
fn on_next_frame_uses_the_pending_request() {
    let mut host = ManualHost::new();
    let mut ticker = Ticker::new(ScrollFollower::default());
    assert!(!ticker.on_next_frame(&mut host, FRAME));
    ticker.start(&mut host);
    ticker.animator_mut().set_scroll(500.0);
    host.take_frame();
    assert!(ticker.on_next_frame(&mut host, FRAME));
    assert!((ticker.animator().offset() - 40.0).abs() < 1e-3);
}

struct RefusingHost;

impl FrameHost for RefusingHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        None
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

#[test]
fn refused_request_stops_the_loop() {
    let mut fl = FrameLoop::new();
    assert!(!fl.start(&mut RefusingHost));
    assert_eq!(fl.state(), LoopState::Stopped);
    assert_eq!(fl.pending(), None);
}

#[test]
fn independent_widgets_share_a_host_in_any_order() {
    let mut host = ManualHost::new();
    let mut cursor = Ticker::new(CursorFollower::default());
    let mut scroll = Ticker::new(ScrollFollower::default());
    let mut drawers: Vec<Ticker<Drawer>> = (0..3).map(|_| Ticker::new(Drawer::default())).collect();

    cursor.start(&mut host);
    scroll.start(&mut host);
    for d in &mut drawers {
        d.start(&mut host);
    }
    cursor.animator_mut().set_pointer(Vec2::new(100.0, 0.0));
    scroll.animator_mut().set_scroll(1000.0);
    drawers[1].animator_mut().hover_enter();

    for frame in 0..10 {
        let mut fired = host.take_frame();
        assert_eq!(fired.len(), 5);
        if frame % 2 == 1 {
            fired.reverse();
        }
        for h in fired {
            let mut handled = 0;
            handled += cursor.on_frame(h, &mut host, FRAME) as u32;
            handled += scroll.on_frame(h, &mut host, FRAME) as u32;
            for d in &mut drawers {
                handled += d.on_frame(h, &mut host, FRAME) as u32;
            }
            assert_eq!(handled, 1, "each handle belongs to exactly one loop");
        }
    }

    let expected = 100.0 * (1.0 - 0.9_f32.powi(10));
    assert!((cursor.animator().position().x - expected).abs() < 1e-3);
    let expected = 1000.0 * (1.0 - 0.92_f32.powi(10));
    assert!((scroll.animator().offset() - expected).abs() < 1e-2);
    assert_eq!(drawers[0].animator().height(), DRAWER_COLLAPSED_PX);
    assert!(drawers[1].animator().height() > DRAWER_COLLAPSED_PX);
    assert_eq!(drawers[2].animator().height(), DRAWER_COLLAPSED_PX);

    // unmount one drawer; the rest keep running
    drawers[1].stop(&mut host);
    assert_eq!(host.pending_count(), 4);
}

#[test]
fn second_start_keeps_the_pending_request() {
    let mut host = ManualHost::new();
    let mut ticker = Ticker::new(CursorFollower::default());
    assert!(ticker.start(&mut host));
    let first = ticker.frame_loop().pending();
    assert!(!ticker.start(&mut host));
    assert_eq!(ticker.frame_loop().pending(), first);
    assert_eq!(ticker.frame_loop().state(), LoopState::Running);
    assert_eq!(host.pending_count(), 1);
}
