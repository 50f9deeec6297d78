// Mobile navigation wiring. The burger button and nav live in the header
// partial, so this runs once that partial has been inserted. Every click
// is published straight to the UI reducer; `reflect_nav` then mirrors the
// resulting state onto the DOM.

use super::ACTIVE_CLASS;
use crate::diag::console_warn;
use crate::state::UiAction;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};
use yew::Callback;

pub const BURGER_ID: &str = "burger-menu";
pub const NAV_ID: &str = "mobile-nav";
pub const OVERLAY_CLASS: &str = "mobile-menu-overlay";
pub const OVERLAY_SELECTOR: &str = ".mobile-menu-overlay";
pub const LINK_SELECTOR: &str = ".mobile-nav-link";
const BOUND_ATTR: &str = "data-menu-bound";

/// Attach the menu handlers. Returns `false` if the header markup is not on
/// the page. Calling it again for an already wired header does nothing.
pub fn attach(on_action: &Callback<UiAction>) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let burger = document.get_element_by_id(BURGER_ID);
    let nav = document.get_element_by_id(NAV_ID);
    let (Some(burger), Some(nav)) = (burger, nav) else {
        return false;
    };
    wire_once(
        burger.has_attribute(BOUND_ATTR),
        || {
            let Some(overlay) = overlay(&document) else {
                console_warn!("Mobile menu overlay could not be created");
                return false;
            };
            listen(&burger, on_action, UiAction::ToggleNav);
            listen(&overlay, on_action, UiAction::CloseNav);
            if let Ok(links) = nav.query_selector_all(LINK_SELECTOR) {
                for i in 0..links.length() {
                    if let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        listen(&link, on_action, UiAction::CloseNav);
                    }
                }
            }
            true
        },
        || {
            let _ = burger.set_attribute(BOUND_ATTR, "");
        },
    )
}

/// Run `wire` unless already marked; the mark is only set once `wire`
/// succeeds, so a failed attempt is retried on the next call.
fn wire_once(bound: bool, wire: impl FnOnce() -> bool, mark: impl FnOnce()) -> bool {
    if bound {
        return true;
    }
    if !wire() {
        return false;
    }
    mark();
    true
}

fn overlay(document: &Document) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(OVERLAY_SELECTOR) {
        return Some(existing);
    }
    let el = document.create_element("div").ok()?;
    el.set_class_name(OVERLAY_CLASS);
    if document.body().is_some_and(|b| b.class_list().contains(super::MENU_OPEN_CLASS)) {
        super::set_class(&el, ACTIVE_CLASS, true);
    }
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

fn listen(target: &Element, on_action: &Callback<UiAction>, action: UiAction) {
    let cb = on_action.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_| cb.emit(action.clone()));
    let result = target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    if let Err(e) = result {
        console_warn!("Could not wire mobile menu handler: {e:?}");
    }
    handler.forget();
}
