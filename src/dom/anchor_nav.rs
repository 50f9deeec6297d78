// In-page hash links. One delegated click listener on the document turns
// hash links into smooth scrolls. The how-to-play link lives in the shared
// header, so on any page other than the landing page it goes back there.

use super::document;
use crate::diag::console_warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Event, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub const HOW_TO_PLAY: &str = "#how-to-play";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashNav {
    /// Not a hash link; the browser handles it.
    Ignore,
    /// Leave for another page.
    Redirect(String),
    /// Smooth-scroll to the element matching this selector, if any.
    Scroll(String),
}

/// Decide what a click on a link with `hash` does from a page at `pathname`.
pub fn hash_link_action(pathname: &str, hash: &str) -> HashNav {
    if hash.is_empty() || hash == "#" {
        return HashNav::Ignore;
    }
    if hash == HOW_TO_PLAY && !pathname.ends_with('/') {
        return HashNav::Redirect(format!("./{hash}"));
    }
    HashNav::Scroll(hash.to_string())
}

/// Install the document-wide listener. Call once per page.
pub fn attach() {
    let Some(document) = document() else { return };
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(link) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlAnchorElement>().ok())
        else {
            return;
        };
        let Some(window) = web_sys::window() else { return };
        let pathname = window.location().pathname().unwrap_or_default();
        match hash_link_action(&pathname, &link.hash()) {
            HashNav::Ignore => {}
            HashNav::Redirect(href) => {
                event.prevent_default();
                if let Err(e) = window.location().set_href(&href) {
                    console_warn!("Could not navigate to {href}: {e:?}");
                }
            }
            HashNav::Scroll(selector) => {
                event.prevent_default();
                scroll_to(&selector);
            }
        }
    });
    let result =
        document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    if let Err(e) = result {
        console_warn!("Could not wire hash link navigation: {e:?}");
    }
    handler.forget();
}

fn scroll_to(selector: &str) {
    // Hashes that are not valid selectors simply find nothing.
    let Some(target) = document().and_then(|d| d.query_selector(selector).ok().flatten()) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn how_to_play_from_a_subpage_returns_to_landing() {
        assert_eq!(
            hash_link_action("/contact.html", HOW_TO_PLAY),
            HashNav::Redirect("./#how-to-play".to_string())
        );
        assert_eq!(
            hash_link_action("/site/news.html", HOW_TO_PLAY),
            HashNav::Redirect("./#how-to-play".to_string())
        );
    }

    #[test]
    fn how_to_play_on_landing_scrolls() {
        assert_eq!(
            hash_link_action("/", HOW_TO_PLAY),
            HashNav::Scroll(HOW_TO_PLAY.to_string())
        );
        assert_eq!(
            hash_link_action("/site/", HOW_TO_PLAY),
            HashNav::Scroll(HOW_TO_PLAY.to_string())
        );
    }

    #[test]
    fn other_hashes_scroll_in_place() {
        assert_eq!(
            hash_link_action("/contact.html", "#faq"),
            HashNav::Scroll("#faq".to_string())
        );
    }

    #[test]
    fn links_without_a_hash_are_left_alone() {
        assert_eq!(hash_link_action("/contact.html", ""), HashNav::Ignore);
        assert_eq!(hash_link_action("/", "#"), HashNav::Ignore);
    }
}
