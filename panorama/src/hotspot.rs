//! Hotspot descriptors: informational overlays anchored to sphere
//! coordinates, plus the synthesized master-plan hotspot.

#[cfg(test)]
#[path = "hotspot_test.rs"]
mod hotspot_test;

use serde::{Deserialize, Serialize};

use crate::icons::HotspotIcon;

/// Reserved id for the synthesized master-plan overlay hotspot.
pub const MASTER_PLAN_HOTSPOT_ID: &str = "master-plan";

/// Pitch of the master-plan hotspot: straight down (nadir).
pub const MASTER_PLAN_PITCH: f64 = -90.0;

/// A labeled point of interest on the sphere.
///
/// `pitch` is −90..90, `yaw` −180..180, both degrees. `distance` is a
/// human-readable label ("1.2 km"), not a number the code interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub pitch: f64,
    pub yaw: f64,
    pub title: String,
    pub distance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub icon: HotspotIcon,
    #[serde(default)]
    pub highlight: bool,
}

impl Hotspot {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        pitch: f64,
        yaw: f64,
        title: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pitch,
            yaw,
            title: title.into(),
            distance: distance.into(),
            link: None,
            icon: HotspotIcon::Default,
            highlight: false,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: HotspotIcon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// The nadir hotspot that hosts the 2D master-plan image when one is
/// configured. Title/distance are unused by its tooltip.
#[must_use]
pub fn master_plan_hotspot() -> Hotspot {
    Hotspot::new(MASTER_PLAN_HOTSPOT_ID, MASTER_PLAN_PITCH, 0.0, "", "")
}

/// Final hotspot list for the engine: master-plan hotspot first (when
/// present) so its tooltip is built before the labeled ones.
#[must_use]
pub fn hotspot_list(hotspots: &[Hotspot], with_master_plan: bool) -> Vec<Hotspot> {
    let mut list = Vec::with_capacity(hotspots.len() + usize::from(with_master_plan));
    if with_master_plan {
        list.push(master_plan_hotspot());
    }
    list.extend_from_slice(hotspots);
    list
}

/// Landmarks around the Mirai tower, used when the caller supplies none.
#[must_use]
pub fn default_hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot::new("sports-city", 2.0, -128.0, "Dubai Sports City", "3.4 km")
            .with_icon(HotspotIcon::Sports),
        Hotspot::new("cycling-track", 1.0, -96.0, "Al Qudra Cycling Track", "9.8 km")
            .with_icon(HotspotIcon::Cycling),
        Hotspot::new("central-park", 3.5, -52.0, "Central Park", "1.2 km")
            .with_icon(HotspotIcon::Park)
            .highlighted(),
        Hotspot::new("kids-zone", 2.5, -18.0, "Kids Adventure Zone", "850 m")
            .with_icon(HotspotIcon::Kids),
        Hotspot::new("golf-course", 1.5, 24.0, "Jumeirah Golf Estates", "6.1 km")
            .with_icon(HotspotIcon::Golf),
        Hotspot::new("city-walk", 4.0, 58.0, "City Walk Mall", "4.7 km")
            .with_icon(HotspotIcon::Shopping),
        Hotspot::new("intl-school", 2.0, 92.0, "GEMS International School", "2.3 km")
            .with_icon(HotspotIcon::School),
        Hotspot::new("expo-city", 1.0, 131.0, "Expo City", "11.5 km")
            .with_icon(HotspotIcon::Convention),
        Hotspot::new("marina-lake", 2.5, 163.0, "Marina Lakeside", "5.9 km")
            .with_icon(HotspotIcon::Lake),
        Hotspot::new("al-maktoum", 0.5, -161.0, "Al Maktoum International", "14.2 km")
            .with_icon(HotspotIcon::Airport),
    ]
}
