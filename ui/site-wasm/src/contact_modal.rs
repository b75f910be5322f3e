//! Contact modal controller.
//!
//! Visibility state machine for the contact form overlay. Submission goes
//! to the `/contact` endpoint; rejection keeps the modal open with the
//! server's message, success resets the form and navigates to the
//! confirmation page.

use crate::api::{self, SubmitOutcome};
use crate::dom::{self, Elements};
use crate::state;
use gloo_console::{error, log};
use site_catalog::ContactRequest;

const CONFIRMATION_PAGE: &str = "thank-you.html";
const NETWORK_FAILURE_MESSAGE: &str =
    "No se pudo enviar el formulario. Revise su conexi\u{00f3}n e intente de nuevo.";

/// Show or hide the modal, keeping background scroll in lockstep.
pub fn toggle(els: &Elements, show: bool) {
    dom::toggle_class(&els.contact_modal, "active", show);
    let _ = els
        .body
        .style()
        .set_property("overflow", if show { "hidden" } else { "" });
    state::set_contact_modal_open(show);
}

/// Open with the interest field pre-selected, for the product-modal
/// handoff. `None` leaves the current selection alone.
pub fn open_with_category(els: &Elements, category: Option<u32>) {
    toggle(els, true);
    if let Some(c) = category {
        els.interest_select.set_value(&c.to_string());
    }
}

fn show_error(els: &Elements, message: &str) {
    dom::set_text(&els.form_error, message);
    dom::add_class(&els.form_error, "visible");
}

fn clear_error(els: &Elements) {
    dom::set_text(&els.form_error, "");
    dom::remove_class(&els.form_error, "visible");
}

fn read_payload(els: &Elements) -> ContactRequest {
    ContactRequest {
        name: els.name_input.value().trim().to_string(),
        phone_number: els.phone_input.value().trim().to_string(),
        option: els.interest_select.value().parse().unwrap_or(0),
    }
}

/// Submit the form. The modal closes only on success; on any failure the
/// fields are left intact for resubmission.
pub async fn handle_submit(els: &Elements) {
    let payload = read_payload(els);

    match api::submit_contact(&payload).await {
        SubmitOutcome::Accepted(body) => {
            log!("contact accepted:", body.to_string());
            clear_error(els);
            toggle(els, false);
            els.contact_form.reset();
            let _ = dom::window().location().set_href(CONFIRMATION_PAGE);
        }
        SubmitOutcome::Rejected { status, detail } => {
            error!("contact rejected:", status, detail.clone());
            show_error(els, &detail);
        }
        SubmitOutcome::NetworkError(message) => {
            error!("contact network failure:", message);
            show_error(els, NETWORK_FAILURE_MESSAGE);
        }
    }
}
