#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn hotspot_builder_defaults() {
    let hs = Hotspot::new("park", 3.5, -52.0, "Central Park", "1.2 km");
    assert_eq!(hs.id, "park");
    assert_eq!(hs.icon, HotspotIcon::Default);
    assert!(hs.link.is_none());
    assert!(!hs.highlight);
}

#[test]
fn hotspot_builder_chains() {
    let hs = Hotspot::new("park", 3.5, -52.0, "Central Park", "1.2 km")
        .with_icon(HotspotIcon::Park)
        .with_link("https://example.com/park")
        .highlighted();
    assert_eq!(hs.icon, HotspotIcon::Park);
    assert_eq!(hs.link.as_deref(), Some("https://example.com/park"));
    assert!(hs.highlight);
}

#[test]
fn master_plan_hotspot_is_nadir() {
    let hs = master_plan_hotspot();
    assert_eq!(hs.id, MASTER_PLAN_HOTSPOT_ID);
    assert_eq!(hs.pitch, -90.0);
    assert_eq!(hs.yaw, 0.0);
}

#[test]
fn hotspot_list_prepends_master_plan() {
    let own = default_hotspots();
    let list = hotspot_list(&own, true);
    assert_eq!(list.len(), own.len() + 1);
    assert_eq!(list[0].id, MASTER_PLAN_HOTSPOT_ID);
    assert_eq!(list[1], own[0]);
}

#[test]
fn hotspot_list_without_master_plan_is_unchanged() {
    let own = default_hotspots();
    let list = hotspot_list(&own, false);
    assert_eq!(list, own);
}

#[test]
fn default_hotspots_are_well_formed() {
    let hotspots = default_hotspots();
    assert!(!hotspots.is_empty());
    for hs in &hotspots {
        assert!((-90.0..=90.0).contains(&hs.pitch), "{} pitch", hs.id);
        assert!((-180.0..=180.0).contains(&hs.yaw), "{} yaw", hs.id);
        assert!(!hs.title.is_empty());
        assert!(!hs.distance.is_empty());
        assert_ne!(hs.id, MASTER_PLAN_HOTSPOT_ID);
    }
}

#[test]
fn default_hotspot_ids_are_unique() {
    let hotspots = default_hotspots();
    let mut ids: Vec<_> = hotspots.iter().map(|h| h.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), hotspots.len());
}

#[test]
fn hotspot_serde_defaults_optional_fields() {
    let json = r#"{"id":"x","pitch":1.0,"yaw":2.0,"title":"T","distance":"1 km"}"#;
    let hs: Hotspot = serde_json::from_str(json).unwrap();
    assert_eq!(hs.icon, HotspotIcon::Default);
    assert!(hs.link.is_none());
    assert!(!hs.highlight);
}
