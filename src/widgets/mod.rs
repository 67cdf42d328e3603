//! Mounted page effects. Each widget owns its own frame loop and listeners;
//! nothing is shared between instances.

use wasm_bindgen::prelude::*;

pub mod cursor;
pub mod drawer;
pub mod lab_cursor;
pub mod scroll;

pub trait Mounted {
    /// Cancels the pending frame and detaches every listener. Called at most
    /// once per widget.
    fn unmount(&mut self);
}

/// Handle returned to JS by the `mount_*` exports.
#[wasm_bindgen]
pub struct Widget {
    inner: Option<Box<dyn Mounted>>,
}

impl Widget {
    pub(crate) fn new(mounted: impl Mounted + 'static) -> Self {
        Self {
            inner: Some(Box::new(mounted)),
        }
    }
}

#[wasm_bindgen]
impl Widget {
    /// Stops the widget. Further calls do nothing.
    pub fn unmount(&mut self) {
        if let Some(mut w) = self.inner.take() {
            w.unmount();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.unmount();
    }
}
