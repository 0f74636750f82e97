//! Platform abstraction layer
//!
//! Browser-only glue for:
//! - DOM overlay and score display (`dom`)
//! - MediaPipe Hands and the camera helper (`mediapipe`)
//! - Viewport sizing
//!
//! The native build has no platform layer; it drives the simulation
//! headlessly with `ui::LogPresenter`.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod mediapipe;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomPresenter, element_by_id, viewport_size};

/// Describe a rejected JS value for logs and error messages
#[cfg(target_arch = "wasm32")]
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
