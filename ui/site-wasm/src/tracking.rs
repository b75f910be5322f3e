//! Third-party analytics tag.
//!
//! Injects the GTM bootstrap script at page load, skipped on
//! local-development hosts. No further runtime interaction.

use crate::dom;
use gloo_console::log;

const GTM_ID: &str = "GTM-KP4V392P";

fn is_local_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}

pub fn init() {
    let hostname = dom::window().location().hostname().unwrap_or_default();
    if is_local_host(&hostname) {
        log!("tracking disabled on local host");
        return;
    }

    let script = dom::create_element("script");
    script.set_inner_html(&format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\
         new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\
         j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\
         'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\
         }})(window,document,'script','dataLayer','{GTM_ID}');"
    ));

    if let Some(head) = dom::document().head() {
        let _ = head.prepend_with_node_1(&script);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_are_skipped() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("127.0.0.1"));
        assert!(!is_local_host("vitrinasgdl.mx"));
    }
}
