//! wasm-bindgen bindings to the Pannellum panoramic rendering engine.
//!
//! The engine is a CDN-loaded global (`window.pannellum`); the shell emits
//! the script tag and [`wait_for_engine`] polls for the global before the
//! controller constructs an instance.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    /// One viewer instance bound to a container element.
    pub type PannellumViewer;

    /// `pannellum.viewer(containerId, config)`; throws on malformed
    /// config, hence `catch`.
    #[wasm_bindgen(catch, js_namespace = pannellum, js_name = viewer)]
    pub fn create_viewer(container: &str, config: &JsValue) -> Result<PannellumViewer, JsValue>;

    #[wasm_bindgen(method, js_name = getYaw)]
    pub fn get_yaw(this: &PannellumViewer) -> f64;

    #[wasm_bindgen(method, js_name = setYaw)]
    pub fn set_yaw(this: &PannellumViewer, yaw: f64);

    #[wasm_bindgen(method, js_name = getPitch)]
    pub fn get_pitch(this: &PannellumViewer) -> f64;

    #[wasm_bindgen(method, js_name = setPitch)]
    pub fn set_pitch(this: &PannellumViewer, pitch: f64);

    #[wasm_bindgen(method, js_name = getHfov)]
    pub fn get_hfov(this: &PannellumViewer) -> f64;

    #[wasm_bindgen(method, js_name = setHfov)]
    pub fn set_hfov(this: &PannellumViewer, hfov: f64);

    /// Animated camera move; `animated_ms` is the animation duration.
    #[wasm_bindgen(method, js_name = lookAt)]
    pub fn look_at(this: &PannellumViewer, pitch: f64, yaw: f64, hfov: f64, animated_ms: f64);

    /// Subscribe to an engine event (`"load"` fires once, `"error"` on
    /// failures).
    #[wasm_bindgen(method)]
    pub fn on(this: &PannellumViewer, event: &str, callback: &js_sys::Function);

    /// Tear down the instance; may throw mid-teardown, hence `catch`.
    #[wasm_bindgen(catch, method)]
    pub fn destroy(this: &PannellumViewer) -> Result<(), JsValue>;
}

/// Whether the CDN script has installed the global yet.
#[must_use]
pub fn engine_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("pannellum")).unwrap_or(false)
}

/// Poll until the engine global exists. The script tag is in the document
/// head, so in practice this resolves within a tick or two.
pub async fn wait_for_engine() {
    while !engine_available() {
        gloo_timers::future::TimeoutFuture::new(100).await;
    }
}
