pub mod consent;
pub mod ui;

pub use consent::{Consent, ConsentStore, LocalConsentStore};
pub use ui::{Banner, Notice, NoticeKind, UiAction, UiState};
