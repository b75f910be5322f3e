//! URL fragment routing.
//!
//! The fragment mirrors the active section: read on load and on
//! back/forward traversal, pushed on user-driven switches, replaced when
//! normalizing on first paint.

use crate::dom::{self, Elements};
use crate::sections;
use crate::state;
use gloo_console::log;
use wasm_bindgen::prelude::*;

fn fragment() -> String {
    dom::window().location().hash().unwrap_or_default()
}

pub fn push_fragment(key: &str) {
    if let Ok(history) = dom::window().history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{key}")));
    }
}

pub fn replace_fragment(key: &str) {
    if let Ok(history) = dom::window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{key}")));
    }
}

/// Derive the initial section from the URL, render it without the fade
/// sequence, and normalize the fragment without adding a history entry.
pub fn resolve_initial(els: &Elements) {
    let hash = fragment();
    let key = state::with_catalog(|c| c.resolve_fragment(&hash).to_string());
    log!("initial section:", key.clone());

    sections::apply_section_chrome(els, &key);
    state::set_current_section(&key);
    sections::render_section(els, &key, false);
    replace_fragment(&key);
}

/// Back/forward traversal: re-resolve from the fragment and re-drive the
/// switcher. The browser already moved the history cursor, so no entry is
/// written.
pub fn on_popstate(els: &Elements) {
    let hash = fragment();
    let key = state::with_catalog(|c| c.resolve_fragment(&hash).to_string());
    sections::switch_section(els, &key, false);
}
