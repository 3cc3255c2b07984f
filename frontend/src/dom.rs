use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::interaction::anchor::scroll_target;

pub fn warn_js(context: &str, err: JsValue) {
    warn!("{}: {:?}", context, err);
}

/// Vertical scroll offset of the page, 0 when there is no window.
pub fn scroll_y() -> f64 {
    match web_sys::window().map(|window| window.scroll_y()) {
        Some(Ok(y)) => y,
        Some(Err(err)) => {
            warn_js("failed to read scroll position", err);
            0.0
        }
        None => 0.0,
    }
}

/// Smoothly scrolls so the element matching `selector` sits under the navbar.
/// Does nothing when no element matches.
pub fn scroll_to_section(selector: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let section = window
        .document()
        .and_then(|document| document.query_selector(selector).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    match section {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(f64::from(section.offset_top())));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => debug!("no section matches {}", selector),
    }
}
