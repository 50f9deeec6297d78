use crate::dom::cookie_banner::{ACCEPT_ID, BANNER_ID, SHOW_CLASS};
use crate::state::Banner;
use yew::prelude::*;

const COOKIE_TEXT: &str = "We use cookies to improve your experience. \
    By continuing to browse the site you agree to our use of cookies.";

#[derive(Properties, PartialEq, Clone)]
pub struct CookieBannerProps {
    pub banner: Banner,
    pub on_accept: Callback<()>,
}

/// Stand-in for pages without their own banner markup. Stays mounted while
/// hidden so suppression by the nav only drops the `show` class; disappears
/// for good once accepted.
#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    if props.banner == Banner::Accepted {
        return html! {};
    }
    let accept = {
        let cb = props.on_accept.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let shown = props.banner.is_shown().then_some(SHOW_CLASS);
    html! {
        <div
            id={BANNER_ID}
            class={classes!("cookie-banner", shown)}
            role="dialog"
            aria-live="polite"
        >
            <div class="cookie-content">
                <p class="cookie-text">{COOKIE_TEXT}</p>
                <button id={ACCEPT_ID} class="cookie-accept" onclick={accept}>{"Accept"}</button>
            </div>
        </div>
    }
}
