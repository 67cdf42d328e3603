use crate::constants::{DATA_TIMING, FINE_POINTER_QUERY, INTERACTABLE_SELECTOR, INTERACTABLE_TAGS};
use anyhow::{anyhow, Context};
use motion_core::Timing;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{id} is not an HTMLElement: {:?}", e))
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::HtmlElement>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("{:?}", e))
        .with_context(|| format!("bad selector {selector}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

/// Whether the primary pointer is precise (mouse, trackpad).
pub fn has_fine_pointer(window: &web::Window) -> bool {
    match window.match_media(FINE_POINTER_QUERY) {
        Ok(Some(mq)) => mq.matches(),
        _ => false,
    }
}

/// Links, buttons and anything inside an `.interactable`.
pub fn is_interactable(el: &web::Element) -> bool {
    if INTERACTABLE_TAGS.contains(&el.tag_name().to_ascii_uppercase().as_str()) {
        return true;
    }
    matches!(el.closest(INTERACTABLE_SELECTOR), Ok(Some(_)))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Parses `data-<key>` as a float. `None` when the attribute is absent.
pub fn data_f32(el: &web::HtmlElement, key: &str) -> Option<anyhow::Result<f32>> {
    let raw = el.dataset().get(key)?;
    Some(
        raw.trim()
            .parse::<f32>()
            .with_context(|| format!("data-{key}=\"{raw}\"")),
    )
}

/// `data-timing` on `el`. Per-frame when absent or unrecognised.
pub fn data_timing(el: &web::HtmlElement) -> Timing {
    match el.dataset().get(DATA_TIMING) {
        None => Timing::PerFrame,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[dom] {e}; stepping per frame");
            Timing::PerFrame
        }),
    }
}

pub fn layout_height(el: &web::Element) -> f32 {
    el.get_bounding_client_rect().height() as f32
}
