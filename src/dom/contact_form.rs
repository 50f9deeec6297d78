// Contact form interception: submissions are turned into ContactMessage
// values and handed to the app instead of posting the page.

use crate::diag::console_warn;
use crate::model::ContactMessage;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, FormData, HtmlFormElement};
use yew::Callback;

pub const FORM_ID: &str = "reef-contact-form";

fn form() -> Option<HtmlFormElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ID))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// Intercept submissions of the contact form. Returns `false` when the page
/// has no contact form.
pub fn attach(on_submit: Callback<ContactMessage>) -> bool {
    let Some(form) = form() else {
        return false;
    };
    let target = form.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        e.prevent_default();
        match FormData::new_with_form(&target) {
            Ok(data) => on_submit.emit(ContactMessage {
                name: field(&data, "name"),
                phone: field(&data, "phone"),
                message: field(&data, "message"),
            }),
            Err(e) => console_warn!("Could not read contact form: {e:?}"),
        }
    });
    let result = form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref());
    if let Err(e) = result {
        console_warn!("Could not wire contact form: {e:?}");
    }
    handler.forget();
    true
}

pub fn reset() {
    if let Some(form) = form() {
        form.reset();
    }
}
