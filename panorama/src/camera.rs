#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// Camera orientation for the spherical viewer.
///
/// `pitch` / `yaw` are degrees; `hfov` is the horizontal field of view in
/// degrees. The engine owns the live values during user interaction; this
/// struct carries the configured and forced orientations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub pitch: f64,
    pub yaw: f64,
    pub hfov: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pitch: crate::config::DEFAULT_INITIAL_PITCH,
            yaw: crate::config::DEFAULT_INITIAL_YAW,
            hfov: crate::config::DEFAULT_INITIAL_HFOV,
        }
    }
}

impl CameraState {
    #[must_use]
    pub fn new(pitch: f64, yaw: f64, hfov: f64) -> Self {
        Self { pitch, yaw, hfov }
    }

    /// Same orientation with the yaw normalized into [0, 360).
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self { yaw: normalize_yaw(self.yaw), ..*self }
    }
}

/// Map any yaw onto [0, 360).
///
/// Every yaw pushed back into the engine goes through this so repeated
/// rotation never accumulates an unbounded angle.
#[must_use]
pub fn normalize_yaw(yaw: f64) -> f64 {
    let wrapped = yaw.rem_euclid(360.0);
    // rem_euclid can yield 360.0 for tiny negative inputs after rounding.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp a pitch to the engine's valid range.
#[must_use]
pub fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(-90.0, 90.0)
}

/// Visual transform that keeps the 2D master-plan overlay locked to the
/// live camera: counter-rotated against the yaw, scaled against the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTransform {
    pub rotate_deg: f64,
    pub scale: f64,
}

/// Compute the overlay transform for the current camera.
///
/// `base_hfov` is the configured initial hfov; zooming in (smaller hfov)
/// grows the overlay proportionally so it stays glued to the nadir.
#[must_use]
pub fn overlay_transform(base_hfov: f64, yaw: f64, hfov: f64) -> OverlayTransform {
    let scale = if hfov > 0.0 { base_hfov / hfov } else { 1.0 };
    OverlayTransform { rotate_deg: -yaw, scale }
}

impl OverlayTransform {
    /// CSS `transform` value applied to the overlay image element.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotate_deg, self.scale)
    }
}
