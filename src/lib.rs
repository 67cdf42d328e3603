#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod style;
mod widgets;

use constants::{
    CURSOR_ELEMENT_ID, DRAWER_SELECTOR, LAB_CURSOR_ELEMENT_ID, SCROLL_CONTAINER_ID, SCROLL_SPACER_ID,
};
pub use widgets::Widget;

thread_local! {
    // Widgets mounted from page markup at startup
    static AUTO_MOUNTED: RefCell<Vec<Widget>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    let mounted = auto_mount(&window, &document);
    log::info!("[init] {} widget(s) mounted", mounted.len());
    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(mounted));
    Ok(())
}

/// Resolves once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = document.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

/// Mounts every widget whose hook element is on the page. A widget that
/// fails to mount is logged and skipped.
fn auto_mount(window: &web::Window, document: &web::Document) -> Vec<Widget> {
    let mut out = Vec::new();

    if document.get_element_by_id(CURSOR_ELEMENT_ID).is_some() {
        if dom::has_fine_pointer(window) {
            match dom::element_by_id(document, CURSOR_ELEMENT_ID)
                .and_then(widgets::cursor::mount)
            {
                Ok(w) => out.push(Widget::new(w)),
                Err(e) => log::warn!("[init] cursor: {e:#}"),
            }
        } else {
            log::info!("[init] coarse pointer, cursor disabled");
        }
    }

    if document.get_element_by_id(LAB_CURSOR_ELEMENT_ID).is_some() {
        if dom::has_fine_pointer(window) {
            match dom::element_by_id(document, LAB_CURSOR_ELEMENT_ID)
                .and_then(widgets::lab_cursor::mount)
            {
                Ok(w) => out.push(Widget::new(w)),
                Err(e) => log::warn!("[init] lab cursor: {e:#}"),
            }
        } else {
            log::info!("[init] coarse pointer, lab cursor disabled");
        }
    }

    if document.get_element_by_id(SCROLL_CONTAINER_ID).is_some() {
        let scroll = dom::element_by_id(document, SCROLL_CONTAINER_ID).and_then(|container| {
            let spacer = dom::element_by_id(document, SCROLL_SPACER_ID)?;
            widgets::scroll::mount(container, spacer)
        });
        match scroll {
            Ok(w) => out.push(Widget::new(w)),
            Err(e) => log::warn!("[init] smooth scroll: {e:#}"),
        }
    }

    match dom::query_all(document, DRAWER_SELECTOR) {
        Ok(drawers) => {
            for el in drawers {
                match widgets::drawer::mount(el) {
                    Ok(w) => out.push(Widget::new(w)),
                    Err(e) => log::warn!("[init] drawer: {e:#}"),
                }
            }
        }
        Err(e) => log::warn!("[init] drawers: {e:#}"),
    }

    out
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Physics cursor on `el`, for pages that manage their own lifecycle.
#[wasm_bindgen]
pub fn mount_cursor(el: web::HtmlElement) -> Result<Widget, JsValue> {
    widgets::cursor::mount(el).map(Widget::new).map_err(to_js)
}

/// Speed-sized lab cursor on `el`. Hides the native cursor until unmounted.
#[wasm_bindgen]
pub fn mount_lab_cursor(el: web::HtmlElement) -> Result<Widget, JsValue> {
    widgets::lab_cursor::mount(el).map(Widget::new).map_err(to_js)
}

#[wasm_bindgen]
pub fn mount_smooth_scroll(
    container: web::HtmlElement,
    spacer: web::HtmlElement,
) -> Result<Widget, JsValue> {
    widgets::scroll::mount(container, spacer)
        .map(Widget::new)
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn mount_drawer(el: web::HtmlElement) -> Result<Widget, JsValue> {
    widgets::drawer::mount(el).map(Widget::new).map_err(to_js)
}

/// Unmounts everything mounted at startup. Widgets returned by the
/// `mount_*` exports are not affected.
#[wasm_bindgen]
pub fn unmount_all() {
    let widgets = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    log::info!("[init] unmounting {} widget(s)", widgets.len());
    drop(widgets);
}
