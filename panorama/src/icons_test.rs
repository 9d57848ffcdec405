use super::*;

const ALL: [HotspotIcon; 21] = [
    HotspotIcon::Sports,
    HotspotIcon::Cycling,
    HotspotIcon::Park,
    HotspotIcon::Kids,
    HotspotIcon::Golf,
    HotspotIcon::Cafe,
    HotspotIcon::Restaurant,
    HotspotIcon::Bar,
    HotspotIcon::Building,
    HotspotIcon::Road,
    HotspotIcon::School,
    HotspotIcon::University,
    HotspotIcon::Convention,
    HotspotIcon::Tech,
    HotspotIcon::Government,
    HotspotIcon::Shopping,
    HotspotIcon::Lake,
    HotspotIcon::Airport,
    HotspotIcon::Hotel,
    HotspotIcon::Hospital,
    HotspotIcon::Default,
];

#[test]
fn every_icon_yields_svg_markup() {
    for icon in ALL {
        let svg = icon.svg();
        assert!(svg.starts_with("<svg"), "{icon:?}");
        assert!(svg.ends_with("</svg>"), "{icon:?}");
    }
}

#[test]
fn default_variant_is_default() {
    assert_eq!(HotspotIcon::default(), HotspotIcon::Default);
}

#[test]
fn icon_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&HotspotIcon::Airport).unwrap();
    assert_eq!(json, r#""airport""#);
    let back: HotspotIcon = serde_json::from_str(r#""park""#).unwrap();
    assert_eq!(back, HotspotIcon::Park);
}
