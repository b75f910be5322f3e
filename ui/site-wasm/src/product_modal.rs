//! Product detail modal.
//!
//! Visibility + slideshow-index state machine. The overlay markup is
//! injected once at startup; element references are bound right after and
//! cached for the lifetime of the page. `show_slide` is the sole
//! index-mutation path; next/prev and the dots delegate to it.

use crate::contact_modal;
use crate::dom::{self, Elements};
use crate::state;
use gloo_timers::callback::Timeout;
use site_catalog::{quote_message, wrap_slide, Feature, Product, WHATSAPP_NUMBER};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlElement};

/// Delay between closing this modal and opening the contact modal, so the
/// two overlay transitions don't overlap.
const HANDOFF_DELAY_MS: u32 = 300;

const DEFAULT_DELIVERY: &str = "Entrega estimada: 3-5 d\u{00ed}as h\u{00e1}biles.";

/// References into the injected overlay markup.
#[derive(Clone)]
struct ModalEls {
    overlay: Element,
    close_btn: HtmlElement,
    slides: Element,
    dots: Element,
    prev_btn: HtmlElement,
    next_btn: HtmlElement,
    title: Element,
    description: Element,
    features: Element,
    price: Element,
    price_value: Element,
    delivery: Element,
    quote_btn: HtmlElement,
    whatsapp_btn: HtmlAnchorElement,
}

thread_local! {
    static MODAL_ELS: RefCell<Option<ModalEls>> = RefCell::new(None);
    // Owned handoff timer; replacing it cancels a still-pending handoff.
    static HANDOFF_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

fn modal_els() -> Option<ModalEls> {
    MODAL_ELS.with(|m| m.borrow().clone())
}

/// Inject the overlay markup and wire its events. Call once at startup;
/// fails fast if the injected markup doesn't bind.
pub fn init(els: &Elements) -> Result<(), JsValue> {
    dom::body().insert_adjacent_html("beforeend", MODAL_HTML)?;

    let m = ModalEls {
        overlay: require("productModal")?,
        close_btn: require_html("productModalCloseBtn")?,
        slides: require("productModalSlides")?,
        dots: require("productModalDots")?,
        prev_btn: require_html("slideshowPrevBtn")?,
        next_btn: require_html("slideshowNextBtn")?,
        title: require("productModalTitle")?,
        description: require("productModalDescription")?,
        features: require("productModalFeatures")?,
        price: require("productModalPrice")?,
        price_value: require("productModalPriceValue")?,
        delivery: require("productModalDelivery")?,
        quote_btn: require_html("productModalQuoteBtn")?,
        whatsapp_btn: dom::by_id_typed::<HtmlAnchorElement>("productModalWhatsappBtn")
            .ok_or_else(|| JsValue::from_str("missing anchor #productModalWhatsappBtn"))?,
    };

    bind_events(els, &m);
    MODAL_ELS.with(|slot| *slot.borrow_mut() = Some(m));
    Ok(())
}

fn require(id: &str) -> Result<Element, JsValue> {
    dom::by_id(id).ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn require_html(id: &str) -> Result<HtmlElement, JsValue> {
    dom::by_id_typed::<HtmlElement>(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing html element #{id}")))
}

fn bind_events(els: &Elements, m: &ModalEls) {
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        close();
    }) as Box<dyn FnMut(_)>);
    m.close_btn
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    // Click on the dimmed backdrop, not the container, closes.
    let overlay_id = m.overlay.id();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        if let Some(target) = e.target() {
            if let Ok(target_el) = target.dyn_into::<Element>() {
                if target_el.id() == overlay_id {
                    close();
                }
            }
        }
    }) as Box<dyn FnMut(_)>);
    m.overlay
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        show_prev_slide();
    }) as Box<dyn FnMut(_)>);
    m.prev_btn
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        show_next_slide();
    }) as Box<dyn FnMut(_)>);
    m.next_btn
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        handoff_to_contact(&els2);
    }) as Box<dyn FnMut(_)>);
    m.quote_btn
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Open the modal for `product` (the full catalog object, optional fields
/// included) and reset the slideshow to its first image.
pub fn open(product: Product) {
    let Some(m) = modal_els() else { return };

    populate(&m, &product);
    state::set_current_product(Some(product));
    state::set_product_modal_open(true);

    dom::add_class(&m.overlay, "active");
    let _ = dom::body().style().set_property("overflow", "hidden");
}

/// Hide the modal, clear the current product, and reset the slide index.
pub fn close() {
    let Some(m) = modal_els() else { return };

    dom::remove_class(&m.overlay, "active");
    let _ = dom::body().style().set_property("overflow", "");
    state::set_current_product(None);
    state::set_product_modal_open(false);
    state::set_slide_index(0);
}

fn populate(m: &ModalEls, product: &Product) {
    dom::set_text(&m.title, &product.title);
    let description = product
        .full_description
        .as_deref()
        .unwrap_or(&product.desc);
    dom::set_text(&m.description, description);

    render_features(&m.features, product.features.as_deref());

    match &product.price {
        Some(price) => {
            dom::set_style(&m.price, "display", "flex");
            dom::set_text(&m.price_value, price);
        }
        None => dom::set_style(&m.price, "display", "none"),
    }

    let delivery = product.delivery.as_deref().unwrap_or(DEFAULT_DELIVERY);
    dom::set_text(&m.delivery, delivery);

    m.whatsapp_btn.set_href(&whatsapp_link(&product.title));

    setup_slideshow(m, &product.gallery(), &product.title);
}

fn whatsapp_link(title: &str) -> String {
    let message = quote_message(title);
    let encoded = js_sys::encode_uri_component(&message);
    format!("https://wa.me/{WHATSAPP_NUMBER}?text={encoded}")
}

fn render_features(container: &Element, features: Option<&[Feature]>) {
    let mut html = String::new();
    for feature in features.unwrap_or_default() {
        html.push_str(&format!(
            r#"
            <div class="product-feature-item">
                <svg class="product-feature-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">{icon}</svg>
                <span class="product-feature-text">{text}</span>
            </div>
            "#,
            icon = feature.icon.svg_path(),
            text = feature.text,
        ));
    }
    dom::set_inner_html(container, &html);
}

fn setup_slideshow(m: &ModalEls, images: &[String], title: &str) {
    dom::set_inner_html(&m.slides, "");
    dom::set_inner_html(&m.dots, "");
    state::set_slide_count(images.len());
    state::set_slide_index(0);

    for (index, src) in images.iter().enumerate() {
        let slide = dom::create_element("div");
        let _ = slide.set_attribute("class", "slideshow-slide");
        let img = dom::create_element("img");
        let _ = img.set_attribute("src", src);
        let _ = img.set_attribute("alt", &format!("{} - Imagen {}", title, index + 1));
        let _ = slide.append_child(&img);
        let _ = m.slides.append_child(&slide);

        let dot = dom::create_element("button");
        let _ = dot.set_attribute("class", "slideshow-dot");
        let _ = dot.set_attribute("data-index", &index.to_string());
        let requested = index as i64;
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            show_slide(requested);
        }) as Box<dyn FnMut(_)>);
        dot.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
        let _ = m.dots.append_child(&dot);
    }

    // Navigation is pointless on a single image.
    let controls_display = if images.len() <= 1 { "none" } else { "" };
    dom::set_style(&m.prev_btn, "display", controls_display);
    dom::set_style(&m.next_btn, "display", controls_display);
    dom::set_style(&m.dots, "display", controls_display);

    show_slide(0);
}

/// Normalize `requested` by wraparound, reposition the strip, and update
/// the indicator dots. The sole index-mutation path.
pub fn show_slide(requested: i64) {
    let Some(m) = modal_els() else { return };
    let total = state::slide_count();
    if total == 0 {
        return;
    }

    let index = wrap_slide(requested, total);
    state::set_slide_index(index);

    let offset = -(index as i64) * 100;
    dom::set_style(&m.slides, "transform", &format!("translateX({offset}%)"));

    for (i, dot) in dom::query_all_within(&m.dots, ".slideshow-dot")
        .into_iter()
        .enumerate()
    {
        dom::toggle_class(&dot, "active", i == index);
    }
}

pub fn show_next_slide() {
    show_slide(state::slide_index() as i64 + 1);
}

pub fn show_prev_slide() {
    show_slide(state::slide_index() as i64 - 1);
}

/// Close this modal, then open the contact modal with the product's
/// category pre-selected. The delay keeps the two overlay transitions from
/// overlapping; a repeated trigger supersedes the pending one.
pub fn handoff_to_contact(els: &Elements) {
    let category = state::current_product().and_then(|p| p.category);
    close();

    let els2 = els.clone();
    let timeout = Timeout::new(HANDOFF_DELAY_MS, move || {
        contact_modal::open_with_category(&els2, category);
    });
    HANDOFF_TIMER.with(|t| *t.borrow_mut() = Some(timeout));
}

const MODAL_HTML: &str = r##"
<div class="product-modal-overlay" id="productModal">
    <div class="product-modal-container">
        <button class="product-modal-close" id="productModalCloseBtn" aria-label="Cerrar modal">
            <svg viewBox="0 0 24 24" fill="none">
                <path d="M18 6L6 18M6 6l12 12" stroke="currentColor" stroke-linecap="round"/>
            </svg>
        </button>

        <div class="product-modal-image">
            <div class="slideshow-container">
                <div class="slideshow-slides" id="productModalSlides"></div>
                <button class="slideshow-btn prev" id="slideshowPrevBtn" aria-label="Anterior">
                    <svg viewBox="0 0 24 24"><path d="M15 18l-6-6 6-6"/></svg>
                </button>
                <button class="slideshow-btn next" id="slideshowNextBtn" aria-label="Siguiente">
                    <svg viewBox="0 0 24 24"><path d="M9 18l6-6-6-6"/></svg>
                </button>
                <div class="slideshow-dots" id="productModalDots"></div>
            </div>
        </div>

        <div class="product-modal-content">
            <div class="product-modal-header">
                <h2 id="productModalTitle"></h2>
                <p id="productModalDescription"></p>
            </div>

            <div class="product-modal-features" id="productModalFeatures"></div>

            <div class="product-modal-price" id="productModalPrice" style="display: none;">
                <span class="product-modal-price-label">Precio desde:</span>
                <span class="product-modal-price-value" id="productModalPriceValue"></span>
            </div>

            <div class="product-modal-actions">
                <button class="btn-primary" id="productModalQuoteBtn">
                    Solicitar Cotizaci&oacute;n
                </button>
                <a href="#" class="btn-secondary" id="productModalWhatsappBtn" target="_blank" rel="noopener noreferrer">
                    WhatsApp
                </a>
            </div>

            <div class="product-modal-delivery">
                <span id="productModalDelivery"></span>
            </div>
        </div>
    </div>
</div>
"##;
