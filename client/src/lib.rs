//! # client
//!
//! Leptos + WASM frontend for the Mirai property site. The interesting part
//! is the 360° panorama viewer: its image-resolution cascade, Pannellum
//! engine bindings, lifecycle controller, and auto-rotation scheduler live
//! under [`viewer`]; the pure decision logic they drive lives in the
//! `panorama` crate.

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "hydrate")]
pub mod viewer;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
