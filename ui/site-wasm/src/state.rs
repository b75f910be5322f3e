//! UI state.
//!
//! `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Each controller mutates only its own fields, through these accessors;
//! nothing reaches into another controller's state or derives state from
//! DOM classes.

use site_catalog::{Catalog, Product};
use std::cell::RefCell;

/// Central UI state. One value per controller-owned state machine.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Active section key; `None` until the router resolves the first one.
    pub current_section: Option<String>,
    /// Product shown in the detail modal, when open.
    pub current_product: Option<Product>,
    pub product_modal_open: bool,
    /// Slideshow position; meaningless while the modal is closed.
    pub slide_index: usize,
    pub slide_count: usize,
    pub contact_modal_open: bool,
    pub menu_open: bool,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
    static CATALOG: Catalog = Catalog::builtin();
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Run a closure against the immutable site catalog.
pub fn with_catalog<F, R>(f: F) -> R
where
    F: FnOnce(&Catalog) -> R,
{
    CATALOG.with(f)
}

// ── Convenience accessors ──

pub fn current_section() -> Option<String> {
    with(|s| s.current_section.clone())
}

pub fn set_current_section(key: &str) {
    with_mut(|s| s.current_section = Some(key.to_string()));
}

pub fn current_product() -> Option<Product> {
    with(|s| s.current_product.clone())
}

pub fn set_current_product(p: Option<Product>) {
    with_mut(|s| s.current_product = p);
}

pub fn product_modal_open() -> bool {
    with(|s| s.product_modal_open)
}

pub fn set_product_modal_open(open: bool) {
    with_mut(|s| s.product_modal_open = open);
}

pub fn slide_index() -> usize {
    with(|s| s.slide_index)
}

pub fn set_slide_index(i: usize) {
    with_mut(|s| s.slide_index = i);
}

pub fn slide_count() -> usize {
    with(|s| s.slide_count)
}

pub fn set_slide_count(n: usize) {
    with_mut(|s| s.slide_count = n);
}

pub fn contact_modal_open() -> bool {
    with(|s| s.contact_modal_open)
}

pub fn set_contact_modal_open(open: bool) {
    with_mut(|s| s.contact_modal_open = open);
}

pub fn menu_open() -> bool {
    with(|s| s.menu_open)
}

pub fn set_menu_open(open: bool) {
    with_mut(|s| s.menu_open = open);
}
