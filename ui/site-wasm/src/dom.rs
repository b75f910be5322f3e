//! DOM element bindings.
//!
//! All static page anchors are resolved once at startup by
//! [`Elements::bind`]; a missing anchor aborts initialization with a
//! descriptive error instead of silently no-opping later. Elements the
//! product modal injects at runtime are bound separately in
//! `product_modal`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = document().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Element {
    document().create_element(tag).unwrap()
}

/// Set an inline style property, ignoring failures.
pub fn set_style(el: &Element, prop: &str, value: &str) {
    let html: &HtmlElement = el.unchecked_ref();
    let _ = html.style().set_property(prop, value);
}

// ── Elements struct ──

/// All static DOM anchors used by the site.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub header: Element,

    // Navigation
    pub nav_links_container: Element,
    pub all_nav_links: Vec<Element>,
    pub hamburger: Element,
    pub menu_overlay: Element,

    // Content
    pub content_wrapper: Element,
    pub content_elements: Vec<Element>,
    pub products_grid: Element,

    // Contact modal
    pub contact_modal: Element,
    pub modal_close_btn: HtmlElement,
    pub contact_nav_btn: HtmlElement,
    pub contact_form: HtmlFormElement,
    pub form_error: Element,
    pub name_input: HtmlInputElement,
    pub phone_input: HtmlInputElement,
    pub interest_select: HtmlSelectElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all static DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            body: body(),
            header: get_el!("header"),

            nav_links_container: get_el!("navLinks"),
            all_nav_links: query_all("#navLinks a"),
            hamburger: get_el!("hamburgerMenu"),
            menu_overlay: get_el!("menuOverlay"),

            content_wrapper: query(".content-wrapper")
                .ok_or_else(|| JsValue::from_str("missing .content-wrapper"))?,
            content_elements: query_all("[data-content]"),
            products_grid: query(r#"[data-content="productsGrid"]"#)
                .ok_or_else(|| JsValue::from_str("missing products grid"))?,

            contact_modal: get_el!("contactModal"),
            modal_close_btn: get_html!("modalCloseBtn"),
            contact_nav_btn: get_html!("contactNavBtn"),
            contact_form: get_form!("contactForm"),
            form_error: get_el!("formError"),
            name_input: get_input!("name"),
            phone_input: get_input!("phone"),
            interest_select: get_select!("interest"),
        })
    }
}
