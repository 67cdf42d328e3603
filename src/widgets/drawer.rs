use crate::constants::{
    DATA_COLLAPSED, DATA_ELASTICITY, DATA_EXPANDED, DATA_VISCOSITY, DRAWER_EXPANDED_CLASS,
};
use crate::dom;
use crate::events::Listener;
use crate::frame::RafLoop;
use crate::style;
use crate::widgets::Mounted;
use motion_core::{Drawer, DrawerConfig};
use web_sys as web;

/// Card that springs open on hover and closes on leave.
pub struct DrawerWidget {
    el: web::HtmlElement,
    frame_loop: RafLoop<Drawer>,
    listeners: Vec<Listener>,
}

/// Defaults with any `data-*` overrides applied. Unparseable or unstable
/// values fall back to the defaults as a whole.
pub fn config_for(el: &web::HtmlElement) -> DrawerConfig {
    let mut cfg = DrawerConfig::default();
    let fields: [(&str, &mut f32); 4] = [
        (DATA_ELASTICITY, &mut cfg.spring.elasticity),
        (DATA_VISCOSITY, &mut cfg.spring.viscosity),
        (DATA_COLLAPSED, &mut cfg.collapsed),
        (DATA_EXPANDED, &mut cfg.expanded),
    ];
    for (key, slot) in fields {
        match dom::data_f32(el, key) {
            Some(Ok(v)) => *slot = v,
            Some(Err(e)) => {
                log::warn!("[drawer] ignoring overrides: {e:#}");
                return DrawerConfig::default();
            }
            None => {}
        }
    }
    if let Err(e) = cfg.validate() {
        log::warn!("[drawer] ignoring overrides: {e}");
        return DrawerConfig::default();
    }
    cfg
}

pub fn mount(el: web::HtmlElement) -> anyhow::Result<DrawerWidget> {
    let drawer = Drawer::new(config_for(&el));

    let render_el = el.clone();
    let mut shown = false;
    dom::set_class(&el, DRAWER_EXPANDED_CLASS, shown);
    dom::set_style(&el, "height", &style::px(drawer.height()));
    let mut frame_loop = RafLoop::new(drawer, move |d: &Drawer| {
        dom::set_style(&render_el, "height", &style::px(d.height()));
        if d.is_expanded() != shown {
            shown = d.is_expanded();
            dom::set_class(&render_el, DRAWER_EXPANDED_CLASS, shown);
        }
    });

    let enter = frame_loop.handle();
    let leave = frame_loop.handle();
    let listeners = vec![
        Listener::new::<web::Event>(el.as_ref(), "mouseenter", move |_| {
            enter.with(|d| d.hover_enter());
        })?,
        Listener::new::<web::Event>(el.as_ref(), "mouseleave", move |_| {
            leave.with(|d| d.hover_leave());
        })?,
    ];

    frame_loop.start()?;
    Ok(DrawerWidget {
        el,
        frame_loop,
        listeners,
    })
}

impl Mounted for DrawerWidget {
    fn unmount(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        dom::clear_style(&self.el, "height");
        dom::set_class(&self.el, DRAWER_EXPANDED_CLASS, false);
    }
}
