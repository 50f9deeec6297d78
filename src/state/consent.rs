// Persisted cookie-consent flag.

use crate::diag::console_warn;

/// Whether the visitor has accepted the cookie notice. Only ever moves from
/// `Unknown` to `Accepted`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Consent {
    #[default]
    Unknown,
    Accepted,
}

impl Consent {
    /// Any non-empty stored value counts as accepted.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if !v.is_empty() => Consent::Accepted,
            _ => Consent::Unknown,
        }
    }
}

pub trait ConsentStore {
    fn load(&self) -> Consent;
    fn accept(&self);
}

const ACCEPTED_VALUE: &str = "true";

/// Consent kept in the origin's localStorage under a fixed key.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalConsentStore {
    key: String,
}

impl LocalConsentStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ConsentStore for LocalConsentStore {
    fn load(&self) -> Consent {
        let raw = Self::storage().and_then(|s| s.get_item(&self.key).ok().flatten());
        Consent::from_stored(raw.as_deref())
    }

    fn accept(&self) {
        let Some(store) = Self::storage() else {
            console_warn!("localStorage unavailable; consent not persisted");
            return;
        };
        if let Err(e) = store.set_item(&self.key, ACCEPTED_VALUE) {
            console_warn!("Could not persist consent under {}: {e:?}", self.key);
        }
    }
}
