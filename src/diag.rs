// Console diagnostics. On wasm these go to the browser console, natively
// (unit tests) to stderr.

#[cfg(target_family = "wasm")]
use wasm_bindgen::JsValue;

pub fn log(msg: &str) {
    #[cfg(target_family = "wasm")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_family = "wasm"))]
    eprintln!("{msg}");
}

pub fn warn(msg: &str) {
    #[cfg(target_family = "wasm")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_family = "wasm"))]
    eprintln!("warning: {msg}");
}

pub fn error(msg: &str) {
    #[cfg(target_family = "wasm")]
    web_sys::console::error_1(&JsValue::from_str(msg));
    #[cfg(not(target_family = "wasm"))]
    eprintln!("error: {msg}");
}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::diag::log(&format!($($arg)*))
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::diag::warn(&format!($($arg)*))
    };
}

macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::diag::error(&format!($($arg)*))
    };
}

pub(crate) use console_error;
pub(crate) use console_log;
pub(crate) use console_warn;
