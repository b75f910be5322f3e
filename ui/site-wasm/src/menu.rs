//! Mobile navigation drawer.

use crate::dom::{self, Elements};
use crate::state;

/// Open or close the drawer. `force` wins when given, otherwise the state
/// inverts. Drawer, hamburger, scrim, and body scroll lock move in
/// lockstep; there is no partial state.
pub fn toggle(els: &Elements, force: Option<bool>) {
    let show = force.unwrap_or(!state::menu_open());
    state::set_menu_open(show);

    dom::toggle_class(&els.nav_links_container, "open", show);
    dom::toggle_class(&els.hamburger, "open", show);
    dom::toggle_class(&els.menu_overlay, "open", show);
    dom::toggle_class(&els.body, "no-scroll", show);
}

/// Close the drawer if a navigation action left it open.
pub fn close_if_open(els: &Elements) {
    if state::menu_open() {
        toggle(els, Some(false));
    }
}
