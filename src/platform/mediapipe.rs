//! Bindings to the MediaPipe `Hands` solution and `Camera` helper
//!
//! Both are globals loaded from the CDN scripts in `index.html`. Options
//! go across as JSON built from the serde types in `hands`, and results
//! come back the same way.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use super::describe_js;
use crate::error::{GameError, Result};
use crate::hands::{CameraOptions, HandResults, HandsOptions, locate_file};

#[wasm_bindgen]
extern "C" {
    /// MediaPipe hand landmark tracker
    pub type Hands;

    #[wasm_bindgen(constructor)]
    fn new(config: &js_sys::Object) -> Hands;

    #[wasm_bindgen(method, js_name = setOptions)]
    fn set_options(this: &Hands, options: &JsValue);

    #[wasm_bindgen(method, js_name = onResults)]
    fn on_results(this: &Hands, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn send(this: &Hands, inputs: &js_sys::Object) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    /// MediaPipe camera utility: pumps webcam frames into a callback
    pub type Camera;

    #[wasm_bindgen(constructor)]
    fn new(video: &HtmlVideoElement, options: &js_sys::Object) -> Camera;

    #[wasm_bindgen(method)]
    fn start(this: &Camera) -> js_sys::Promise;
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| GameError::Js(describe_js(&e)))
}

/// Serialize a value into a plain JS object
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| GameError::Js(describe_js(&e)))
}

/// Decode the hands from an `onResults` payload
pub fn read_results(results: &JsValue) -> Result<HandResults> {
    let landmarks = js_sys::Reflect::get(results, &JsValue::from_str("multiHandLandmarks"))
        .map_err(|e| GameError::Js(describe_js(&e)))?;
    if landmarks.is_undefined() || landmarks.is_null() {
        return Ok(HandResults::default());
    }
    let json = js_sys::JSON::stringify(&landmarks)
        .map_err(|e| GameError::Js(describe_js(&e)))?
        .as_string()
        .unwrap_or_default();
    Ok(HandResults::from_landmarks_json(&json)?)
}

/// Create and configure the tracker; `on_results` receives every decoded
/// result, including empty ones.
pub fn create_hands(
    options: &HandsOptions,
    mut on_results: impl FnMut(HandResults) + 'static,
) -> Result<Hands> {
    let config = js_sys::Object::new();
    let locate = Closure::<dyn Fn(String) -> String>::new(|file: String| locate_file(&file));
    set(&config, "locateFile", locate.as_ref())?;
    locate.forget();

    let hands = Hands::new(&config);
    hands.set_options(&to_js(options)?);

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |results: JsValue| {
        match read_results(&results) {
            Ok(results) => on_results(results),
            Err(e) => log::warn!("Bad tracker result: {}", e),
        }
    });
    hands.on_results(callback.as_ref().unchecked_ref());
    callback.forget();

    Ok(hands)
}

/// Start the webcam and forward every frame to the tracker. Fails with
/// `CameraUnavailable` if the user denies access or no camera exists.
pub async fn start_camera(
    video: HtmlVideoElement,
    hands: Rc<Hands>,
    options: &CameraOptions,
) -> Result<()> {
    let frame_video = video.clone();
    let on_frame = Closure::<dyn FnMut() -> js_sys::Promise>::new(move || {
        let inputs = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&inputs, &JsValue::from_str("image"), &frame_video);
        hands.send(&inputs)
    });

    let config = js_sys::Object::new();
    set(&config, "onFrame", on_frame.as_ref())?;
    set(&config, "width", &JsValue::from(options.width))?;
    set(&config, "height", &JsValue::from(options.height))?;
    on_frame.forget();

    let camera = Camera::new(&video, &config);
    JsFuture::from(camera.start())
        .await
        .map_err(|e| GameError::CameraUnavailable(describe_js(&e)))?;

    log::info!("Camera started ({}x{})", options.width, options.height);
    Ok(())
}
