//! Event binding.
//!
//! Wires every static UI event listener in one place. Handlers on
//! dynamically rendered nodes (product cards, slideshow dots) are attached
//! by their renderers instead.

use crate::contact_modal;
use crate::dom::{self, Elements};
use crate::header;
use crate::menu;
use crate::product_modal;
use crate::router;
use crate::sections;
use crate::state;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Bind all static event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Section navigation ──
    for link in &els.all_nav_links {
        let Some(section) = link.get_attribute("data-section") else {
            continue;
        };
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            sections::switch_section(&els2, &section, true);
            menu::close_if_open(&els2);
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Contact modal ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            e.prevent_default();
            contact_modal::toggle(&els2, true);
            menu::close_if_open(&els2);
        }) as Box<dyn FnMut(_)>);
        els.contact_nav_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            contact_modal::toggle(&els2, false);
        }) as Box<dyn FnMut(_)>);
        els.modal_close_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        // Backdrop click, not clicks inside the dialog.
        let els2 = els.clone();
        let overlay_id = els.contact_modal.id();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            if let Some(target) = e.target() {
                if let Ok(target_el) = target.dyn_into::<web_sys::Element>() {
                    if target_el.id() == overlay_id {
                        contact_modal::toggle(&els2, false);
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);
        els.contact_modal
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                contact_modal::handle_submit(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.contact_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Escape closes whichever overlay is open ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() != "Escape" {
                return;
            }
            if state::product_modal_open() {
                product_modal::close();
            } else if state::contact_modal_open() {
                contact_modal::toggle(&els2, false);
            }
        }) as Box<dyn FnMut(_)>);
        dom::document()
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Mobile menu ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            menu::toggle(&els2, None);
        }) as Box<dyn FnMut(_)>);
        els.hamburger
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            menu::toggle(&els2, Some(false));
        }) as Box<dyn FnMut(_)>);
        els.menu_overlay
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Header shadow ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            header::handle_scroll(&els2);
        }) as Box<dyn FnMut(_)>);
        dom::window()
            .add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Back/forward traversal ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
            router::on_popstate(&els2);
        }) as Box<dyn FnMut(_)>);
        dom::window()
            .add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
