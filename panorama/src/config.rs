//! Viewer configuration surface and engine constants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::hotspot::Hotspot;

/// Default label shown in the "Viewing:" badge.
pub const DEFAULT_LABEL: &str = "200M.JPG";

/// One full revolution of auto-rotation, in milliseconds.
pub const DEFAULT_ROTATION_DURATION_MS: f64 = 90_000.0;

/// Pitch the camera settles at before auto-rotation so the horizon
/// hotspots are in view.
pub const HOTSPOT_PITCH: f64 = 10.0;

/// Initial orientation: straight down at the master plan.
pub const DEFAULT_INITIAL_PITCH: f64 = -90.0;
pub const DEFAULT_INITIAL_YAW: f64 = -35.0;
pub const DEFAULT_INITIAL_HFOV: f64 = 95.0;

/// Engine zoom limits.
pub const MIN_HFOV: f64 = 50.0;
pub const MAX_HFOV: f64 = 120.0;

/// Full-sphere equirectangular coverage.
pub const HAOV: f64 = 360.0;
pub const VAOV: f64 = 180.0;

/// Drag friction passed to the engine.
pub const FRICTION: f64 = 0.15;

/// Delay after "load" before the camera leaves the nadir view.
pub const SETTLE_DELAY_MS: u32 = 3000;

/// Duration of the animated `lookAt` toward the hotspot pitch.
pub const LOOK_AT_ANIMATION_MS: f64 = 2000.0;

/// Further delay between the `lookAt` and rotation start.
pub const ROTATION_START_DELAY_MS: u32 = 2500;

/// Configuration consumed by the `PanoramaViewer` component.
///
/// Only `panorama_url` is required; everything else has the defaults the
/// Maps page relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    pub panorama_url: String,
    pub master_plan_url: Option<String>,
    pub preloader_gif_url: Option<String>,
    pub label: String,
    pub hotspots: Vec<Hotspot>,
    pub auto_rotate: bool,
    pub rotation_duration_ms: f64,
    pub initial_pitch: f64,
    pub initial_yaw: f64,
    pub initial_hfov: f64,
}

impl ViewerOptions {
    /// Options for a panorama URL with every default applied.
    #[must_use]
    pub fn new(panorama_url: impl Into<String>) -> Self {
        Self {
            panorama_url: panorama_url.into(),
            master_plan_url: None,
            preloader_gif_url: None,
            label: DEFAULT_LABEL.to_owned(),
            hotspots: crate::hotspot::default_hotspots(),
            auto_rotate: true,
            rotation_duration_ms: DEFAULT_ROTATION_DURATION_MS,
            initial_pitch: DEFAULT_INITIAL_PITCH,
            initial_yaw: DEFAULT_INITIAL_YAW,
            initial_hfov: DEFAULT_INITIAL_HFOV,
        }
    }

    /// Initial camera orientation as a `CameraState`.
    #[must_use]
    pub fn initial_camera(&self) -> crate::camera::CameraState {
        crate::camera::CameraState::new(self.initial_pitch, self.initial_yaw, self.initial_hfov)
    }

    /// Hotspot list handed to the engine: the synthesized master-plan
    /// hotspot (when configured) prepended to the configured descriptors.
    #[must_use]
    pub fn engine_hotspots(&self) -> Vec<Hotspot> {
        crate::hotspot::hotspot_list(&self.hotspots, self.master_plan_url.is_some())
    }
}
