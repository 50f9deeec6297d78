//! Page-wide UI state: consent, mobile navigation, cookie banner, the
//! current notice and the sending overlay.
//!
//! The banner's visibility is derived from the other fields, so it can never
//! be shown while the navigation is open and never again once consent has
//! been given.

use super::consent::Consent;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    /// Not shown: not yet revealed, or suppressed by the open navigation.
    Hidden,
    Offered,
    Accepted,
}

impl Banner {
    /// Whether the banner element carries its `show` class.
    pub fn is_shown(self) -> bool {
        self == Banner::Offered
    }
}

/// The two overlay flags as seen by the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayState {
    pub cookie_banner_visible: bool,
    pub mobile_nav_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NoticeKind,
    pub ttl_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub consent: Consent,
    pub nav_open: bool,
    /// Set once the banner's initial reveal delay has passed.
    pub banner_armed: bool,
    /// At most one notice is on screen; a new one replaces it.
    pub notice: Option<Notice>,
    /// A contact message is in flight.
    pub sending: bool,
    next_notice_id: u32,
}

impl UiState {
    pub fn new(consent: Consent) -> Self {
        Self {
            consent,
            nav_open: false,
            banner_armed: false,
            notice: None,
            sending: false,
            next_notice_id: 1,
        }
    }

    pub fn banner(&self) -> Banner {
        match self.consent {
            Consent::Accepted => Banner::Accepted,
            Consent::Unknown if self.banner_armed && !self.nav_open => Banner::Offered,
            Consent::Unknown => Banner::Hidden,
        }
    }

    pub fn overlay(&self) -> OverlayState {
        OverlayState {
            cookie_banner_visible: self.banner().is_shown(),
            mobile_nav_open: self.nav_open,
        }
    }
}

#[derive(Clone, Debug)]
pub enum UiAction {
    /// Initial reveal of the cookie banner after page load.
    ArmBanner,
    /// Burger button.
    ToggleNav,
    /// Overlay background or in-menu link.
    CloseNav,
    AcceptConsent,
    Notify {
        message: String,
        kind: NoticeKind,
        ttl_ms: u32,
    },
    /// Dismiss the notice with this id; ignored if it was already replaced.
    DismissNotice(u32),
    SetSending(bool),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UiAction::*;
        let mut new = (*self).clone();
        match action {
            ArmBanner => {
                if new.banner_armed {
                    return self;
                }
                new.banner_armed = true;
            }
            ToggleNav => new.nav_open = !new.nav_open,
            CloseNav => {
                if !new.nav_open {
                    return self;
                }
                new.nav_open = false;
            }
            AcceptConsent => {
                if new.consent == Consent::Accepted {
                    return self;
                }
                new.consent = Consent::Accepted;
            }
            Notify { message, kind, ttl_ms } => {
                new.notice = Some(Notice {
                    id: new.next_notice_id,
                    message,
                    kind,
                    ttl_ms,
                });
                new.next_notice_id = new.next_notice_id.wrapping_add(1);
            }
            DismissNotice(id) => {
                if new.notice.as_ref().map(|n| n.id) != Some(id) {
                    return self;
                }
                new.notice = None;
            }
            SetSending(sending) => {
                if new.sending == sending {
                    return self;
                }
                new.sending = sending;
            }
        }
        Rc::new(new)
    }
}
