use super::cookie_banner::CookieBanner;
use super::loading_overlay::LoadingOverlay;
use super::notice_toast::NoticeToast;
use crate::config::SiteConfig;
use crate::contact::{ContactSink, FAILED_MESSAGE, SENT_MESSAGE};
use crate::content::partials::{FOOTER_ANCHOR, HEADER_ANCHOR, load_partial};
use crate::content::{self, Interaction, Outcome, Page, slots};
use crate::diag::{console_error, console_log, console_warn};
use crate::dom::{self, DomPage, HttpFetch, anchor_nav, contact_form, cookie_banner, mobile_menu};
use crate::model::ContactMessage;
use crate::state::{Consent, ConsentStore, LocalConsentStore, NoticeKind, UiAction, UiState};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const CONSENT_MESSAGE: &str = "Cookies accepted!";

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let ui = {
        let store = LocalConsentStore::new(config.consent_key.clone());
        use_reducer(move || UiState::new(store.load()))
    };

    // Pages that ship their own banner markup keep it; the component is
    // only rendered when there is none.
    let page_banner = *use_state(cookie_banner::present);
    let on_accept = accept_callback(ui.dispatcher(), config.consent_notice_ms);

    // Page start: partials, slots, form wiring, delayed banner reveal
    {
        let config = config.clone();
        let dispatcher = ui.dispatcher();
        let on_accept = on_accept.clone();
        use_effect_with((), move |_| {
            let on_action = Callback::from(move |a: UiAction| dispatcher.dispatch(a));
            start_page(&config, &on_action);
            if page_banner && !cookie_banner::attach_accept(&on_accept) {
                console_warn!("Cookie banner has no #{} button", cookie_banner::ACCEPT_ID);
            }
            let reveal =
                Timeout::new(config.banner_delay_ms, move || on_action.emit(UiAction::ArmBanner));
            move || drop(reveal)
        });
    }
    // Mirror banner state onto the page's own banner
    use_effect_with(ui.banner(), move |banner| {
        if page_banner {
            cookie_banner::reflect(*banner);
        }
        || ()
    });
    // Mirror nav state onto the header markup
    use_effect_with(ui.overlay().mobile_nav_open, |open| {
        dom::reflect_nav(*open);
        || ()
    });
    // Persist consent
    {
        let key = config.consent_key.clone();
        use_effect_with(ui.consent, move |consent| {
            if *consent == Consent::Accepted {
                LocalConsentStore::new(key.as_str()).accept();
                console_log!("Cookie consent stored under {key}");
            }
            || ()
        });
    }
    // Auto-dismiss the current notice; a replaced notice cancels its timer
    {
        let dispatcher = ui.dispatcher();
        let current = ui.notice.as_ref().map(|n| (n.id, n.ttl_ms));
        use_effect_with(current, move |current| {
            let timer = current.map(|(id, ttl)| {
                Timeout::new(ttl, move || dispatcher.dispatch(UiAction::DismissNotice(id)))
            });
            move || drop(timer)
        });
    }

    html! {
        <>
            if !page_banner {
                <CookieBanner banner={ui.banner()} on_accept={on_accept} />
            }
            <NoticeToast notice={ui.notice.clone()} />
            <LoadingOverlay show={ui.sending} />
        </>
    }
}

fn accept_callback(dispatcher: UseReducerDispatcher<UiState>, ttl_ms: u32) -> Callback<()> {
    Callback::from(move |_| {
        dispatcher.dispatch(UiAction::AcceptConsent);
        dispatcher.dispatch(UiAction::Notify {
            message: CONSENT_MESSAGE.to_string(),
            kind: NoticeKind::Success,
            ttl_ms,
        });
    })
}

fn start_page(config: &Rc<SiteConfig>, on_action: &Callback<UiAction>) {
    let Some(page) = DomPage::current() else {
        console_warn!("No document available; skipping page setup");
        return;
    };
    let page = Rc::new(page);
    let fetch = Rc::new(HttpFetch {
        timeout_ms: config.fetch_timeout_ms,
    });

    // Pages that inline their header/footer are wired straight away.
    mobile_menu::attach(on_action);
    anchor_nav::attach();
    dom::set_current_year();

    {
        let (page, fetch, on_action) = (page.clone(), fetch.clone(), on_action.clone());
        let path = config.header_partial.clone();
        spawn_local(async move {
            match load_partial(&*fetch, &*page, HEADER_ANCHOR, &path).await {
                Ok(true) => {
                    mobile_menu::attach(&on_action);
                }
                Ok(false) => {}
                Err(e) => console_error!("Failed to load header: {e}"),
            }
        });
    }
    {
        let (page, fetch) = (page.clone(), fetch.clone());
        let path = config.footer_partial.clone();
        spawn_local(async move {
            match load_partial(&*fetch, &*page, FOOTER_ANCHOR, &path).await {
                Ok(true) => dom::set_current_year(),
                Ok(false) => {}
                Err(e) => console_error!("Failed to load footer: {e}"),
            }
        });
    }

    for slot in slots::catalogue(config) {
        if !page.contains(slot.id) {
            continue;
        }
        let (page, fetch) = (page.clone(), fetch.clone());
        let policy = config.interpolation;
        spawn_local(async move {
            let outcome = content::load(&slot, &*fetch, &*page, policy).await;
            let flips = slot.on_render == Some(Interaction::FlipCards);
            if flips && matches!(outcome, Outcome::Rendered(_)) {
                dom::attach_card_flips();
            }
        });
    }

    contact_form::attach(submit_handler(config.clone(), on_action.clone()));
}

fn submit_handler(
    config: Rc<SiteConfig>,
    on_action: Callback<UiAction>,
) -> Callback<ContactMessage> {
    Callback::from(move |message: ContactMessage| {
        let config = config.clone();
        let on_action = on_action.clone();
        spawn_local(async move {
            on_action.emit(UiAction::SetSending(true));
            let result = ContactSink::from_config(&config).submit(&message).await;
            on_action.emit(UiAction::SetSending(false));
            dom::scroll_to_top();
            let (message, kind) = match result {
                Ok(()) => {
                    contact_form::reset();
                    (SENT_MESSAGE, NoticeKind::Success)
                }
                Err(e) => {
                    console_error!("Contact submission failed: {e}");
                    (FAILED_MESSAGE, NoticeKind::Error)
                }
            };
            on_action.emit(UiAction::Notify {
                message: message.to_string(),
                kind,
                ttl_ms: config.notice_ms,
            });
        });
    })
}
