//! Window width tracking.

use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Width used when no window is available.
pub const FALLBACK_WIDTH: u32 = 1024;

/// Current `window.innerWidth` in pixels.
pub fn current_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(FALLBACK_WIDTH)
}

/// A `resize` listener on `window` that is removed when detached or dropped.
///
/// Every resize event reports the new width to the callback; there is no
/// debouncing.
pub struct ResizeListener {
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(u32) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move || {
            on_resize(current_width());
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to add resize listener: {:?}", e);
            } else {
                log::debug!("Resize listener attached");
            }
        }

        Self {
            closure: RefCell::new(Some(closure)),
        }
    }

    /// Deregister the listener. Safe to call more than once.
    pub fn detach(&self) {
        let Some(closure) = self.closure.borrow_mut().take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            log::debug!("Resize listener detached");
        }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
