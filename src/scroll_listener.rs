use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};
use yew::Callback;

/// Window `scroll` subscription that unsubscribes itself when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Registers the listener and immediately reports the current offset.
    pub fn attach(on_scroll: Callback<f64>) -> Option<Self> {
        let Some(window) = window() else {
            warn!("No window available, scroll tracking disabled");
            return None;
        };

        let callback = Closure::<dyn Fn()>::new({
            let window = window.clone();
            let on_scroll = on_scroll.clone();
            move || {
                if let Ok(scroll_y) = window.scroll_y() {
                    on_scroll.emit(scroll_y);
                }
            }
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        // Initial call
        if let Ok(scroll_y) = window.scroll_y() {
            on_scroll.emit(scroll_y);
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        debug!("Removing scroll listener");
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
