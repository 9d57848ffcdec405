#![allow(clippy::float_cmp)]

use super::*;
use crate::hotspot::MASTER_PLAN_HOTSPOT_ID;

#[test]
fn options_defaults() {
    let opts = ViewerOptions::new("/200m.jpg");
    assert_eq!(opts.panorama_url, "/200m.jpg");
    assert_eq!(opts.label, DEFAULT_LABEL);
    assert!(opts.auto_rotate);
    assert_eq!(opts.rotation_duration_ms, DEFAULT_ROTATION_DURATION_MS);
    assert_eq!(opts.initial_pitch, -90.0);
    assert_eq!(opts.initial_yaw, -35.0);
    assert_eq!(opts.initial_hfov, 95.0);
    assert!(opts.master_plan_url.is_none());
    assert!(!opts.hotspots.is_empty());
}

#[test]
fn initial_camera_mirrors_options() {
    let mut opts = ViewerOptions::new("/p.jpg");
    opts.initial_pitch = -10.0;
    opts.initial_yaw = 120.0;
    opts.initial_hfov = 80.0;
    let cam = opts.initial_camera();
    assert_eq!(cam.pitch, -10.0);
    assert_eq!(cam.yaw, 120.0);
    assert_eq!(cam.hfov, 80.0);
}

#[test]
fn engine_hotspots_without_master_plan() {
    let opts = ViewerOptions::new("/p.jpg");
    let list = opts.engine_hotspots();
    assert_eq!(list.len(), opts.hotspots.len());
    assert!(list.iter().all(|h| h.id != MASTER_PLAN_HOTSPOT_ID));
}

#[test]
fn engine_hotspots_prepends_master_plan() {
    let mut opts = ViewerOptions::new("/p.jpg");
    opts.master_plan_url = Some("/master-plan.png".to_owned());
    let list = opts.engine_hotspots();
    assert_eq!(list.len(), opts.hotspots.len() + 1);
    assert_eq!(list[0].id, MASTER_PLAN_HOTSPOT_ID);
    assert_eq!(list[0].pitch, -90.0);
}

#[test]
fn hfov_limits_bracket_default() {
    assert!(MIN_HFOV < DEFAULT_INITIAL_HFOV);
    assert!(DEFAULT_INITIAL_HFOV < MAX_HFOV);
}

#[test]
fn options_serde_round_trip() {
    let mut opts = ViewerOptions::new("/200m.jpg");
    opts.master_plan_url = Some("/mp.png".to_owned());
    let json = serde_json::to_string(&opts).unwrap();
    let back: ViewerOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.panorama_url, opts.panorama_url);
    assert_eq!(back.master_plan_url, opts.master_plan_url);
    assert_eq!(back.hotspots.len(), opts.hotspots.len());
}
