//! Browser-side glue: the live document as a [`Page`], HTTP as a [`Fetch`],
//! and the handful of direct DOM tweaks the site needs.

pub mod anchor_nav;
pub mod contact_form;
pub mod cookie_banner;
pub mod mobile_menu;

use crate::content::{Fetch, Page};
use crate::diag::console_warn;
use crate::error::LoadError;
use futures::future::{Either, select};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

pub const MOUNT_ID: &str = "site-chrome";
pub const MENU_OPEN_CLASS: &str = "menu-open";
pub const ACTIVE_CLASS: &str = "active";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// The current document, addressed by element id.
#[derive(Clone, Debug)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        document().map(|document| Self { document })
    }
}

impl Page for DomPage {
    fn contains(&self, anchor: &str) -> bool {
        self.document.get_element_by_id(anchor).is_some()
    }

    fn replace_content(&self, anchor: &str, markup: &str) -> bool {
        match self.document.get_element_by_id(anchor) {
            Some(el) => {
                el.set_inner_html(markup);
                true
            }
            None => false,
        }
    }
}

/// Same-origin GET requests, optionally bounded by a timeout.
#[derive(Clone, Debug, Default)]
pub struct HttpFetch {
    pub timeout_ms: Option<u32>,
}

impl HttpFetch {
    async fn get(path: &str) -> Result<String, LoadError> {
        let transport = |e: gloo::net::Error| LoadError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        };
        let resp = Request::get(path).send().await.map_err(&transport)?;
        if !resp.ok() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: resp.status(),
            });
        }
        resp.text().await.map_err(&transport)
    }
}

impl Fetch for HttpFetch {
    async fn fetch_text(&self, path: &str) -> Result<String, LoadError> {
        let Some(ms) = self.timeout_ms else {
            return Self::get(path).await;
        };
        let request = Box::pin(Self::get(path));
        let timeout = Box::pin(TimeoutFuture::new(ms));
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(LoadError::Timeout {
                path: path.to_string(),
                ms,
            }),
        }
    }
}

/// Element the Yew app renders into; created at the end of `<body>` when
/// the page does not provide one.
pub fn mount_point() -> Option<Element> {
    let document = document()?;
    if let Some(el) = document.get_element_by_id(MOUNT_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(MOUNT_ID);
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Mirror the navigation state onto the classes the stylesheet keys on.
pub fn reflect_nav(open: bool) {
    let Some(document) = document() else { return };
    if let Some(body) = document.body() {
        set_class(&body, MENU_OPEN_CLASS, open);
    }
    if let Some(nav) = document.get_element_by_id(mobile_menu::NAV_ID) {
        set_class(&nav, ACTIVE_CLASS, open);
    }
    if let Ok(Some(overlay)) = document.query_selector(mobile_menu::OVERLAY_SELECTOR) {
        set_class(&overlay, ACTIVE_CLASS, open);
    }
}

/// Make every rendered diary card flip on click.
pub fn attach_card_flips() {
    let Some(document) = document() else { return };
    let Ok(cards) = document.query_selector_all(".diary-card") else { return };
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let target = card.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let _ = target.class_list().toggle("flipped");
        });
        let result =
            card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        if let Err(e) = result {
            console_warn!("Could not wire card flip: {e:?}");
        }
        on_click.forget();
    }
}

pub fn set_current_year() {
    if let Some(el) = document().and_then(|d| d.get_element_by_id("current-year")) {
        el.set_text_content(Some(&crate::util::current_year().to_string()));
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}
