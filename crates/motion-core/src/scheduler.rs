//! Per-frame loop lifecycle.
//!
//! A [`FrameLoop`] is owned by one widget. It asks a [`FrameHost`] for the
//! next display frame, runs exactly one update when that frame fires, and
//! immediately asks for the following one. `stop` cancels the single pending
//! request; once stopped, late callbacks are ignored and nothing is
//! rescheduled, so a removed widget can never keep animating.
//!
//! The browser frontend implements [`FrameHost`] on top of
//! `requestAnimationFrame`. [`ManualHost`] fires frames on demand and is what
//! host-side tests use.

use fnv::FnvHashSet;
use smallvec::SmallVec;
use std::time::Duration;

/// Something advanced once per frame. Each step must be O(1) and must not
/// depend on any other animator's step in the same frame.
pub trait Animator {
    fn advance(&mut self, elapsed: Duration);
}

/// Id of a scheduled frame callback, as handed out by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameHost {
    /// Schedules one callback for the next frame. `None` when the host
    /// refused (no window, page torn down).
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    /// Schedules the first frame. Returns `false` when already running, when
    /// stopped (loops are not restartable), or when the host refused.
    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        match host.request_frame() {
            Some(h) => {
                self.pending = Some(h);
                self.state = LoopState::Running;
                true
            }
            None => {
                log::warn!("[frame] host refused first frame");
                self.state = LoopState::Stopped;
                false
            }
        }
    }

    /// Handles a fired frame. Runs `update` and reschedules only when the
    /// loop is running and `handle` is the request it is waiting on.
    pub fn on_frame<H, F>(&mut self, handle: FrameHandle, host: &mut H, update: F) -> bool
    where
        H: FrameHost + ?Sized,
        F: FnOnce(),
    {
        if self.state != LoopState::Running || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        update();
        self.frames += 1;
        match host.request_frame() {
            Some(h) => self.pending = Some(h),
            None => {
                log::warn!("[frame] host refused frame after {}", self.frames);
                self.state = LoopState::Stopped;
            }
        }
        true
    }

    /// [`on_frame`](Self::on_frame) for hosts that only ever fire the latest
    /// request, such as `requestAnimationFrame` with one request in flight.
    pub fn on_next_frame<H, F>(&mut self, host: &mut H, update: F) -> bool
    where
        H: FrameHost + ?Sized,
        F: FnOnce(),
    {
        match self.pending {
            Some(h) => self.on_frame(h, host, update),
            None => false,
        }
    }

    /// Cancels the pending frame. Idempotent, and valid before `start`.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(h) = self.pending.take() {
            host.cancel_frame(h);
        }
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames whose update has run.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// A frame loop bundled with the animator it drives.
#[derive(Debug)]
pub struct Ticker<A> {
    frame_loop: FrameLoop,
    animator: A,
}

impl<A: Animator> Ticker<A> {
    pub fn new(animator: A) -> Self {
        Self {
            frame_loop: FrameLoop::new(),
            animator,
        }
    }

    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.frame_loop.start(host)
    }

    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.frame_loop.stop(host);
    }

    pub fn on_frame<H: FrameHost + ?Sized>(
        &mut self,
        handle: FrameHandle,
        host: &mut H,
        elapsed: Duration,
    ) -> bool {
        let animator = &mut self.animator;
        self.frame_loop
            .on_frame(handle, host, || animator.advance(elapsed))
    }

    pub fn on_next_frame<H: FrameHost + ?Sized>(&mut self, host: &mut H, elapsed: Duration) -> bool {
        let animator = &mut self.animator;
        self.frame_loop
            .on_next_frame(host, || animator.advance(elapsed))
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}

/// Host that fires frames only when told to.
#[derive(Debug, Default)]
pub struct ManualHost {
    next_id: i32,
    pending: FnvHashSet<FrameHandle>,
    cancelled: usize,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every pending request, as one display refresh would. The order
    /// is unspecified.
    pub fn take_frame(&mut self) -> SmallVec<[FrameHandle; 4]> {
        self.pending.drain().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Requests cancelled while still pending.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id = self.next_id.wrapping_add(1);
        let h = FrameHandle(self.next_id);
        self.pending.insert(h);
        Some(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}
