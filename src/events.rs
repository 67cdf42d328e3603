//! Listener and timer registrations that undo themselves when dropped.
//!
//! Widgets can be unmounted, so unlike one-shot page wiring these closures
//! are never `forget`-ed: dropping the guard removes the listener and frees
//! the closure.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Adds `handler` for `event` on `target`. Events that are not an `E`
    /// are skipped.
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({event}): {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// `setInterval` guard; cleared on drop.
pub struct Interval {
    window: web::Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(
        window: &web::Window,
        every_ms: i32,
        mut tick: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                every_ms,
            )
            .map_err(|e| anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}
