//! Contact-request payload and outbound messaging helpers.

use serde::{Deserialize, Serialize};

/// Business WhatsApp number, international format without `+`.
pub const WHATSAPP_NUMBER: &str = "523334683900";

/// Options of the contact form's interest `<select>`, in value order.
/// `Product::category` indexes into this list.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Vitrinas de exhibición",
    "Mueblería a medida",
    "Otro proyecto",
];

/// JSON body for `POST /contact`. Field names are fixed by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone_number: String,
    pub option: i64,
}

/// WhatsApp message pre-filled from the product modal. The caller is
/// responsible for URL-encoding before embedding in a `wa.me` link.
pub fn quote_message(product_title: &str) -> String {
    format!(
        "Hola! Me interesa el producto: *{product_title}*. \u{00bf}Podr\u{00ed}an darme m\u{00e1}s informaci\u{00f3}n?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_request_serializes_with_endpoint_field_names() {
        let req = ContactRequest {
            name: "Ana".to_string(),
            phone_number: "3312345678".to_string(),
            option: 1,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana",
                "phone_number": "3312345678",
                "option": 1,
            })
        );
    }

    #[test]
    fn quote_message_embeds_title() {
        let msg = quote_message("Mostradores");
        assert!(msg.contains("*Mostradores*"));
        assert!(msg.starts_with("Hola!"));
    }
}
