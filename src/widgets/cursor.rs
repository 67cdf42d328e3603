use crate::dom;
use crate::events::Listener;
use crate::frame::RafLoop;
use crate::style;
use crate::widgets::Mounted;
use glam::Vec2;
use motion_core::{CursorFollower, LagConfig, StretchConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Circle that trails the pointer, stretching along its travel and growing
/// over interactive elements.
pub struct CursorWidget {
    el: web::HtmlElement,
    frame_loop: RafLoop<CursorFollower>,
    listeners: Vec<Listener>,
}

pub fn mount(el: web::HtmlElement) -> anyhow::Result<CursorWidget> {
    let window = dom::window()?;

    let lag = LagConfig::cursor().with_timing(dom::data_timing(&el));
    let follower = CursorFollower::new(lag, StretchConfig::default());
    let render_el = el.clone();
    let mut frame_loop = RafLoop::new(follower, move |c: &CursorFollower| {
        let frame = c.frame();
        dom::set_style(&render_el, "transform", &style::cursor_transform(&frame));
        let d = style::px(frame.diameter);
        dom::set_style(&render_el, "width", &d);
        dom::set_style(&render_el, "height", &d);
    });

    let follower = frame_loop.handle();
    let on_move = Listener::new::<web::MouseEvent>(window.as_ref(), "mousemove", move |ev| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let hovering = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|t| dom::is_interactable(&t))
            .unwrap_or(false);
        follower.with(|c| {
            c.set_pointer(pointer);
            c.set_hovering(hovering);
        });
    })?;

    frame_loop.start()?;
    log::info!("[cursor] mounted");
    Ok(CursorWidget {
        el,
        frame_loop,
        listeners: vec![on_move],
    })
}

impl Mounted for CursorWidget {
    fn unmount(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        dom::clear_style(&self.el, "transform");
        log::info!("[cursor] unmounted");
    }
}
