//! # panorama
//!
//! Pure-logic core for the Mirai 360° panorama viewer. Camera state and
//! overlay math, rotation-session timing, the image-resolution fallback
//! policy, hotspot data, and the viewer configuration surface all live here
//! so they can be tested natively, without WASM or a browser.
//!
//! The `client` crate drives this logic against the DOM (fetch, canvas,
//! animation frames, the Pannellum engine); the `server` crate provides the
//! same-origin static proxy the fallback policy targets.

pub mod camera;
pub mod config;
pub mod hotspot;
pub mod icons;
pub mod resolve;
pub mod rotation;
