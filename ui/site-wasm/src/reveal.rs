//! Scroll-reveal registration.
//!
//! Arms every `.scroll-animate` element with a one-shot
//! IntersectionObserver trigger. Re-rendered nodes carry no prior state, so
//! the renderer must call [`arm`] again after inserting them.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const VISIBILITY_THRESHOLD: f64 = 0.1;
const BOTTOM_MARGIN: &str = "0px 0px -50px 0px";

const STAGGER_GROUP: usize = 4;
const STAGGER_STEP_MS: u32 = 100;

/// Cascade delay for the element at `index`, capped by cycling every
/// [`STAGGER_GROUP`] elements so large grids don't accumulate delay.
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index % STAGGER_GROUP) as u32 * STAGGER_STEP_MS
}

/// Re-scan the DOM and arm every reveal candidate. Prior revealed state is
/// cleared first so re-armed elements animate again from scratch.
pub fn arm() {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(BOTTOM_MARGIN);

    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "visible");
                    // One-shot: stop watching once revealed.
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).unwrap();
    cb.forget();

    for (index, el) in dom::query_all(".scroll-animate").into_iter().enumerate() {
        dom::remove_class(&el, "visible");
        let _ = el
            .unchecked_ref::<HtmlElement>()
            .style()
            .set_property("transition-delay", &format!("{}ms", stagger_delay_ms(index)));
        observer.observe(&el);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_cycles_and_stays_capped() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(3), 300);
        assert_eq!(stagger_delay_ms(4), 0);
        assert_eq!(stagger_delay_ms(41), 100);
    }
}
