//! Browser ticker backed by `setInterval`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::Ticker;

/// Fires a stored callback on a window interval
#[derive(Default)]
pub struct IntervalTicker {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install what runs on every fire. Takes effect on the next `arm`.
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self, period_ms: u32) {
        self.cancel();
        let Some(callback) = self.callback.as_ref() else {
            log::warn!("Ticker armed without a callback");
            return;
        };
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule ticks on");
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
