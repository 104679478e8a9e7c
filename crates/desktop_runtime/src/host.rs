//! Browser environment queries used by the shell.

use crate::model::Viewport;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Current browser viewport, or `fallback` when it cannot be measured.
pub fn current_viewport(fallback: Viewport) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return Viewport::new(
                css_pixels(window.inner_width(), fallback.width),
                css_pixels(window.inner_height(), fallback.height),
            );
        }
    }

    fallback
}

#[cfg(target_arch = "wasm32")]
fn css_pixels(measured: Result<JsValue, JsValue>, fallback: i32) -> i32 {
    measured
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|px| px.is_finite() && *px > 0.0)
        .map_or(fallback, |px| px.round() as i32)
}
