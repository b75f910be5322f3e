//! Vitrina marketing site, WASM frontend.
//!
//! Pure Rust + WASM single-page site: two business themes, product grids
//! rendered from the static catalog, a product-detail slideshow modal, and
//! a contact-request modal. Each concern lives in its own module.

pub mod api;
pub mod contact_modal;
pub mod dom;
pub mod events;
pub mod header;
pub mod menu;
pub mod product_modal;
pub mod reveal;
pub mod router;
pub mod sections;
pub mod state;
pub mod tracking;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Inject and bind the product modal before anything can open it.
    product_modal::init(&els)?;

    // Bind all static event listeners
    events::bind_events(&els);

    // First paint: section from the URL fragment, no fade, normalized URL.
    router::resolve_initial(&els);

    // Arm scroll-reveal on the freshly rendered content.
    reveal::arm();

    tracking::init();

    Ok(())
}
