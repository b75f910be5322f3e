//! Contact endpoint client.
//!
//! Wraps `gloo-net` for the single form-submission POST. Server rejections
//! and transport failures are distinct outcomes so the modal can report
//! them differently.

use gloo_net::http::Request;
use site_catalog::ContactRequest;

const CONTACT_ENDPOINT: &str = "/contact";

/// Result of a contact submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx; the body is logged, not otherwise inspected.
    Accepted(serde_json::Value),
    /// Non-2xx with a server-provided human-readable detail.
    Rejected { status: u16, detail: String },
    /// The request never produced a response.
    NetworkError(String),
}

pub async fn submit_contact(payload: &ContactRequest) -> SubmitOutcome {
    let request = match Request::post(CONTACT_ENDPOINT).json(payload) {
        Ok(r) => r,
        Err(e) => return SubmitOutcome::NetworkError(e.to_string()),
    };

    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => return SubmitOutcome::NetworkError(e.to_string()),
    };

    if response.ok() {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        return SubmitOutcome::Accepted(body);
    }

    let status = response.status();
    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => rejection_detail(&body),
        Err(_) => fallback_detail(),
    };
    SubmitOutcome::Rejected { status, detail }
}

/// Extract the server's `detail` string, falling back to a generic message
/// when the body doesn't carry one.
fn rejection_detail(body: &serde_json::Value) -> String {
    body.get("detail")
        .and_then(|d| d.as_str())
        .map(str::to_string)
        .unwrap_or_else(fallback_detail)
}

fn fallback_detail() -> String {
    "Ocurri\u{00f3} un error al enviar el formulario.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejection_detail_surfaces_server_message_verbatim() {
        let body = json!({"detail": "Phone invalid"});
        assert_eq!(rejection_detail(&body), "Phone invalid");
    }

    #[test]
    fn rejection_detail_falls_back_without_detail_field() {
        assert_eq!(rejection_detail(&json!({})), fallback_detail());
        assert_eq!(rejection_detail(&json!({"detail": 42})), fallback_detail());
    }
}
