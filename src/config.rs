//! Site configuration.
//!
//! Pages may embed `<script type="application/json" id="site-config">` to
//! override any of the defaults below; unknown keys are ignored and missing
//! keys keep their defaults.

use crate::content::markup::Interpolation;
use crate::diag::console_warn;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the slot JSON documents, relative to the page.
    pub data_dir: String,
    pub header_partial: String,
    pub footer_partial: String,
    /// localStorage key of the consent flag.
    pub consent_key: String,
    pub interpolation: Interpolation,
    /// Give up on a request after this long. `None` waits forever.
    pub fetch_timeout_ms: Option<u32>,
    /// Where contact messages are POSTed. `None` uses the simulated sink.
    pub contact_endpoint: Option<String>,
    pub banner_delay_ms: u32,
    pub consent_notice_ms: u32,
    pub notice_ms: u32,
    pub simulated_submit_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            header_partial: "tide-header.html".to_string(),
            footer_partial: "coral-footer.html".to_string(),
            consent_key: "cookiesAccepted".to_string(),
            interpolation: Interpolation::Raw,
            fetch_timeout_ms: None,
            contact_endpoint: None,
            banner_delay_ms: 100,
            consent_notice_ms: 3000,
            notice_ms: 5000,
            simulated_submit_ms: 1500,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the inline config element, falling back to defaults.
    pub fn from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                console_warn!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn data_path(&self, file: &str) -> String {
        let dir = self.data_dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{dir}/{file}")
        }
    }
}
