use anyhow::anyhow;
use instant::Instant;
use motion_core::{Animator, FrameHandle, FrameHost, LoopState, Ticker};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` as a [`FrameHost`]. Every request re-arms the
/// same callback.
struct RafHost {
    callback: FrameCallback,
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

struct Shared<A> {
    ticker: Ticker<A>,
    last_instant: Instant,
    render: Box<dyn FnMut(&A)>,
}

/// One widget's animation loop: step the animator, reschedule, then hand the
/// new state to `render` for DOM writes.
pub struct RafLoop<A: Animator + 'static> {
    shared: Rc<RefCell<Shared<A>>>,
    callback: FrameCallback,
}

/// Weak access to a loop's animator, for input listeners. Goes inert once the
/// loop is dropped.
pub struct LoopHandle<A>(Weak<RefCell<Shared<A>>>);

impl<A> Clone for LoopHandle<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A> LoopHandle<A> {
    pub fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> Option<R>
    where
        A: Animator,
    {
        let shared = self.0.upgrade()?;
        let mut shared = shared.try_borrow_mut().ok()?;
        Some(f(shared.ticker.animator_mut()))
    }
}

impl<A: Animator + 'static> RafLoop<A> {
    pub fn new(animator: A, render: impl FnMut(&A) + 'static) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                ticker: Ticker::new(animator),
                last_instant: Instant::now(),
                render: Box::new(render),
            })),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn handle(&self) -> LoopHandle<A> {
        LoopHandle(Rc::downgrade(&self.shared))
    }

    /// Schedules the first frame. Only an idle loop starts; the callback of
    /// a running loop is still referenced by the pending request.
    pub fn start(&mut self) -> anyhow::Result<()> {
        let state = self.shared.borrow().ticker.frame_loop().state();
        if state != LoopState::Idle {
            return Err(anyhow!("frame loop already {state:?}"));
        }
        let shared = Rc::downgrade(&self.shared);
        let callback = self.callback.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let Ok(mut s) = shared.try_borrow_mut() else {
                return;
            };
            let now = Instant::now();
            let elapsed = now - s.last_instant;
            s.last_instant = now;
            let mut host = RafHost {
                callback: callback.clone(),
            };
            let Shared { ticker, render, .. } = &mut *s;
            if ticker.on_next_frame(&mut host, elapsed) {
                render(ticker.animator());
            }
        }) as Box<dyn FnMut(f64)>));

        let mut host = RafHost {
            callback: self.callback.clone(),
        };
        let mut s = self.shared.borrow_mut();
        s.last_instant = Instant::now();
        if s.ticker.start(&mut host) {
            Ok(())
        } else {
            drop(s);
            self.callback.borrow_mut().take();
            Err(anyhow!("requestAnimationFrame unavailable"))
        }
    }

    /// Cancels the pending frame and releases the callback. Safe to call
    /// more than once, and before `start`.
    pub fn stop(&mut self) {
        let mut host = RafHost {
            callback: self.callback.clone(),
        };
        if let Ok(mut s) = self.shared.try_borrow_mut() {
            s.ticker.stop(&mut host);
        }
        self.callback.borrow_mut().take();
    }
}

impl<A: Animator + 'static> Drop for RafLoop<A> {
    fn drop(&mut self) {
        self.stop();
    }
}
