//! Section switching and rendering.
//!
//! The switcher owns the active-section state machine and the fade
//! sequencing; the renderer projects a catalog entry into the DOM. Content
//! is never swapped before the fade-out completes.

use crate::dom::{self, Elements};
use crate::product_modal;
use crate::reveal;
use crate::router;
use crate::state;
use gloo_timers::callback::Timeout;
use site_catalog::Product;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, ScrollBehavior, ScrollToOptions};

/// Must match the CSS transition on `.content-wrapper`.
pub const FADE_ANIMATION_DURATION_MS: u32 = 400;

thread_local! {
    // Owned handle of the in-flight fade timer. Replacing it drops (and
    // cancels) the previous one, so a switch requested mid-transition
    // supersedes the old target instead of racing it.
    static PENDING_FADE: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Apply the non-content visual state for a section: theme class, theme
/// marker, and nav highlight.
pub fn apply_section_chrome(els: &Elements, key: &str) {
    let is_default = state::with_catalog(|c| c.default_key() == key);
    dom::toggle_class(&els.body, "theme-muebleria", !is_default);
    let _ = els.body.set_attribute("data-current-theme", key);

    for nav_link in &els.all_nav_links {
        let matches = nav_link.get_attribute("data-section").as_deref() == Some(key);
        dom::toggle_class(nav_link, "active", matches);
    }
}

/// Switch the active section with the fade sequence.
///
/// No-op when `key` is already active or unknown. `push_history` is true
/// for user-driven switches; popstate re-drives pass false because the
/// browser already moved the history cursor.
pub fn switch_section(els: &Elements, key: &str, push_history: bool) {
    if state::current_section().as_deref() == Some(key) {
        return;
    }
    if !state::with_catalog(|c| c.contains(key)) {
        return;
    }

    apply_section_chrome(els, key);
    state::set_current_section(key);

    if push_history {
        router::push_fragment(key);
    }

    dom::add_class(&els.content_wrapper, "fade-out");

    let els2 = els.clone();
    let key2 = key.to_string();
    let timeout = Timeout::new(FADE_ANIMATION_DURATION_MS, move || {
        render_section(&els2, &key2, true);
        dom::remove_class(&els2.content_wrapper, "fade-out");
        scroll_to_top();
    });
    PENDING_FADE.with(|t| *t.borrow_mut() = Some(timeout));
}

fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

/// Project a catalog entry into the DOM. Unknown keys are a soft no-op.
pub fn render_section(els: &Elements, key: &str, animate: bool) {
    let entry = match state::with_catalog(|c| c.get(key).cloned()) {
        Some(entry) => entry,
        None => return,
    };

    for el in &els.content_elements {
        let content_key = el.get_attribute("data-content").unwrap_or_default();
        if let Some(value) = entry.content_value(&content_key) {
            match el.dyn_ref::<HtmlImageElement>() {
                Some(img) => img.set_src(value),
                None => dom::set_inner_html(el, value),
            }
        }
    }

    let mut grid_html = String::new();
    for (index, product) in entry.products.iter().enumerate() {
        grid_html.push_str(&product_card_html(index, product));
    }
    dom::set_inner_html(&els.products_grid, &grid_html);

    wire_product_cards(els, &entry.products);

    if animate {
        reveal::arm();
    }
}

fn product_card_html(index: usize, product: &Product) -> String {
    let price_badge = match &product.price {
        Some(price) => format!(r#"<span class="product-price-badge">{price}</span>"#),
        None => String::new(),
    };
    let tag_chips: String = product
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="feature-tag">{tag}</span>"#))
        .collect();

    format!(
        r#"
        <div class="product-card scroll-animate" data-index="{index}">
            <div class="product-image">
                <img src="{img}" alt="{title}" loading="lazy">
                {price_badge}
            </div>
            <div class="product-info">
                <h3>{title}</h3>
                <p>{desc}</p>
                <div class="product-features">{tag_chips}</div>
            </div>
        </div>
        "#,
        img = product.img,
        title = product.title,
        desc = product.desc,
    )
}

/// Attach a click handler per card, handing the full product (every
/// optional field included) to the product modal.
fn wire_product_cards(els: &Elements, products: &[Product]) {
    for card in dom::query_all_within(&els.products_grid, ".product-card") {
        let index: usize = match card
            .get_attribute("data-index")
            .and_then(|v| v.parse().ok())
        {
            Some(i) => i,
            None => continue,
        };
        let Some(product) = products.get(index).cloned() else {
            continue;
        };

        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            product_modal::open(product.clone());
        }) as Box<dyn FnMut(_)>);
        card.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
