use crate::constants::HEIGHT_SYNC_INTERVAL_MS;
use crate::dom;
use crate::events::{Interval, Listener};
use crate::frame::{LoopHandle, RafLoop};
use crate::style;
use crate::widgets::Mounted;
use motion_core::{LagConfig, ScrollFollower};
use std::rc::Rc;
use web_sys as web;

/// Fixed content layer eased toward the native scroll position. The spacer
/// (and the body) are sized to the content so the page keeps a native
/// scrollbar.
pub struct ScrollWidget {
    container: web::HtmlElement,
    spacer: web::HtmlElement,
    body: Option<web::HtmlElement>,
    frame_loop: RafLoop<ScrollFollower>,
    listeners: Vec<Listener>,
    interval: Option<Interval>,
}

struct HeightSync {
    container: web::HtmlElement,
    spacer: web::HtmlElement,
    body: Option<web::HtmlElement>,
    follower: LoopHandle<ScrollFollower>,
}

impl HeightSync {
    fn run(&self) {
        let h = dom::layout_height(&self.container);
        if self.follower.with(|s| s.set_content_height(h)) != Some(true) {
            return;
        }
        let value = style::px(h);
        dom::set_style(&self.spacer, "height", &value);
        if let Some(body) = &self.body {
            dom::set_style(body, "height", &value);
        }
        log::debug!("[scroll] content height {h:.0}");
    }
}

pub fn mount(container: web::HtmlElement, spacer: web::HtmlElement) -> anyhow::Result<ScrollWidget> {
    let window = dom::window()?;
    let body = window.document().and_then(|d| d.body());

    let lag = LagConfig::scroll().with_timing(dom::data_timing(&container));
    let render_el = container.clone();
    let mut frame_loop = RafLoop::new(ScrollFollower::new(lag), move |s: &ScrollFollower| {
        dom::set_style(&render_el, "transform", &style::scroll_transform(s.offset()));
    });

    let sync = Rc::new(HeightSync {
        container: container.clone(),
        spacer: spacer.clone(),
        body: body.clone(),
        follower: frame_loop.handle(),
    });
    sync.run();

    let follower = frame_loop.handle();
    let scroll_window = window.clone();
    let mut listeners = vec![Listener::new::<web::Event>(window.as_ref(), "scroll", move |_| {
        let y = scroll_window.scroll_y().unwrap_or(0.0) as f32;
        follower.with(|s| s.set_scroll(y));
    })?];
    for event in ["load", "resize"] {
        let sync = sync.clone();
        listeners.push(Listener::new::<web::Event>(window.as_ref(), event, move |_| sync.run())?);
    }
    let interval = {
        let sync = sync.clone();
        Interval::new(&window, HEIGHT_SYNC_INTERVAL_MS, move || sync.run())?
    };

    // a page reloaded mid-scroll starts where it is, without a sweep from the top
    if let Ok(y) = window.scroll_y() {
        frame_loop.handle().with(|s| s.jump_to(y as f32));
    }

    frame_loop.start()?;
    log::info!("[scroll] mounted");
    Ok(ScrollWidget {
        container,
        spacer,
        body,
        frame_loop,
        listeners,
        interval: Some(interval),
    })
}

impl Mounted for ScrollWidget {
    fn unmount(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        self.interval = None;
        dom::clear_style(&self.container, "transform");
        dom::clear_style(&self.spacer, "height");
        if let Some(body) = &self.body {
            dom::clear_style(body, "height");
        }
        log::info!("[scroll] unmounted");
    }
}
