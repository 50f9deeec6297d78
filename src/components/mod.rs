pub mod app;
pub mod cookie_banner;
pub mod loading_overlay;
pub mod notice_toast;

pub use app::{App, AppProps};
