// Host-side tests for the page hooks and the engine defaults they pair with.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn hook_names_are_plain_identifiers() {
    for id in [
        CURSOR_ELEMENT_ID,
        LAB_CURSOR_ELEMENT_ID,
        SCROLL_CONTAINER_ID,
        SCROLL_SPACER_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are passed to getElementById: {id}");
        assert!(!id.contains(' '));
    }
    assert_ne!(SCROLL_CONTAINER_ID, SCROLL_SPACER_ID);
    assert_ne!(CURSOR_ELEMENT_ID, LAB_CURSOR_ELEMENT_ID);
    assert!(DRAWER_SELECTOR.starts_with('.'));
    assert!(INTERACTABLE_SELECTOR.starts_with('.'));
    assert!(!DRAWER_EXPANDED_CLASS.starts_with('.'));
}

#[test]
fn interactable_tags_are_upper_case() {
    // Element.tagName is upper case for HTML documents
    for tag in INTERACTABLE_TAGS {
        assert_eq!(tag, tag.to_ascii_uppercase());
    }
}

#[test]
fn data_keys_are_dataset_names() {
    // dataset keys are camelCase without the data- prefix
    for key in [
        DATA_ELASTICITY,
        DATA_VISCOSITY,
        DATA_COLLAPSED,
        DATA_EXPANDED,
        DATA_TIMING,
    ] {
        assert!(!key.starts_with("data-"));
        assert!(!key.contains('-'));
        assert_eq!(key, key.to_ascii_lowercase());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_and_query() {
    assert!(HEIGHT_SYNC_INTERVAL_MS > 0);
    assert!(FINE_POINTER_QUERY.starts_with('(') && FINE_POINTER_QUERY.ends_with(')'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn engine_defaults_are_consistent() {
    use motion_core::*;
    assert!(CURSOR_LAG > 0.0 && CURSOR_LAG <= 1.0);
    assert!(SCROLL_LAG > 0.0 && SCROLL_LAG <= 1.0);
    assert!(CURSOR_STRETCH_CAP < 1.0);
    assert!(CURSOR_HOVER_DIAMETER_PX > CURSOR_DIAMETER_PX);
    assert!(DRAWER_EXPANDED_PX > DRAWER_COLLAPSED_PX);
    assert!(DRAWER_REVEAL_THRESHOLD_PX < DRAWER_EXPANDED_PX - DRAWER_COLLAPSED_PX);
    assert!(DRAWER_ELASTICITY < SpringConfig::elasticity_limit(DRAWER_VISCOSITY));
    assert!(DrawerConfig::default().validate().is_ok());
}
