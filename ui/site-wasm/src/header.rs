//! Header scroll shadow.

use crate::dom::{self, Elements};

const SCROLL_SHADOW_OFFSET: f64 = 50.0;

pub fn handle_scroll(els: &Elements) {
    let y = dom::window().scroll_y().unwrap_or(0.0);
    dom::toggle_class(&els.header, "scrolled", y > SCROLL_SHADOW_OFFSET);
}
