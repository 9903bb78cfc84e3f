use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::window;

use crate::config::CONTACT_EMAIL;

/// Copies the contact address and tells the user so. The clipboard promise
/// is not awaited; a rejected write goes unnoticed.
pub fn copy_contact_email() {
    let Some(window) = window() else {
        warn!("No window available, cannot copy contact email");
        return;
    };

    let navigator: JsValue = window.navigator().into();
    if write_text(&navigator, CONTACT_EMAIL) {
        info!("Copied contact email to clipboard");
    }

    let _ = window.alert_with_message(&format!("{} copied to clipboard!", CONTACT_EMAIL));
}

// Looked up dynamically: `navigator.clipboard` is absent on insecure origins.
// Returns `true` once `writeText` has been invoked.
fn write_text(navigator: &JsValue, text: &str) -> bool {
    let clipboard = match Reflect::get(navigator, &JsValue::from_str("clipboard")) {
        Ok(clipboard) if !clipboard.is_undefined() => clipboard,
        _ => {
            warn!("Clipboard API unavailable");
            return false;
        }
    };

    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());

    match write {
        Some(write) => write.call1(&clipboard, &JsValue::from_str(text)).is_ok(),
        None => {
            warn!("Clipboard has no writeText");
            false
        }
    }
}
