use crate::dom;
use crate::events::Listener;
use crate::frame::RafLoop;
use crate::style;
use crate::widgets::Mounted;
use glam::Vec2;
use motion_core::SpeedSizer;
use web_sys as web;

/// Ring pinned to the pointer that swells with pointer speed. Hides the
/// native cursor while mounted.
pub struct LabCursorWidget {
    el: web::HtmlElement,
    body: Option<web::HtmlElement>,
    frame_loop: RafLoop<SpeedSizer>,
    listeners: Vec<Listener>,
}

pub fn mount(el: web::HtmlElement) -> anyhow::Result<LabCursorWidget> {
    let window = dom::window()?;
    let body = window.document().and_then(|d| d.body());

    let render_el = el.clone();
    let mut frame_loop = RafLoop::new(SpeedSizer::default(), move |s: &SpeedSizer| {
        if let Some(p) = s.pointer() {
            dom::set_style(&render_el, "transform", &style::lab_cursor_transform(p));
        }
        let d = style::px(s.diameter());
        dom::set_style(&render_el, "width", &d);
        dom::set_style(&render_el, "height", &d);
    });

    let sizer = frame_loop.handle();
    let on_move = Listener::new::<web::MouseEvent>(window.as_ref(), "mousemove", move |ev| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        sizer.with(|s| s.set_pointer(pointer));
    })?;

    frame_loop.start()?;
    if let Some(body) = &body {
        dom::set_style(body, "cursor", "none");
    }
    log::info!("[lab-cursor] mounted");
    Ok(LabCursorWidget {
        el,
        body,
        frame_loop,
        listeners: vec![on_move],
    })
}

impl Mounted for LabCursorWidget {
    fn unmount(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        dom::clear_style(&self.el, "transform");
        if let Some(body) = &self.body {
            dom::clear_style(body, "cursor");
        }
        log::info!("[lab-cursor] unmounted");
    }
}
