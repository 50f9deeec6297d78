// The page's own cookie banner. Pages ship `#cookie-banner` with an
// `#accept-cookies` button in their static markup; the reducer decides
// visibility and this module only mirrors it onto the `show` class.

use super::{document, set_class};
use crate::diag::console_warn;
use crate::state::Banner;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Event;
use yew::Callback;

pub const BANNER_ID: &str = "cookie-banner";
pub const ACCEPT_ID: &str = "accept-cookies";
pub const SHOW_CLASS: &str = "show";

/// Whether the page provides its own banner markup.
pub fn present() -> bool {
    document().is_some_and(|d| d.get_element_by_id(BANNER_ID).is_some())
}

pub fn reflect(banner: Banner) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(BANNER_ID)) {
        set_class(&el, SHOW_CLASS, banner.is_shown());
    }
}

/// Bind the page's accept button. Returns `false` when it is missing.
pub fn attach_accept(on_accept: &Callback<()>) -> bool {
    let Some(button) = document().and_then(|d| d.get_element_by_id(ACCEPT_ID)) else {
        return false;
    };
    let cb = on_accept.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_| cb.emit(()));
    let result = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    if let Err(e) = result {
        console_warn!("Could not wire cookie accept button: {e:?}");
    }
    handler.forget();
    true
}
