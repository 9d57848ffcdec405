//! Inline SVG icons for hotspot tooltips.
//!
//! The tooltips are imperative DOM built by the viewer, so the icons are
//! plain markup strings rather than components.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use serde::{Deserialize, Serialize};

/// Icon kind attached to a hotspot descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotIcon {
    Sports,
    Cycling,
    Park,
    Kids,
    Golf,
    Cafe,
    Restaurant,
    Bar,
    Building,
    Road,
    School,
    University,
    Convention,
    Tech,
    Government,
    Shopping,
    Lake,
    Airport,
    Hotel,
    Hospital,
    #[default]
    Default,
}

macro_rules! icon {
    ($body:expr) => {
        concat!(
            r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

impl HotspotIcon {
    /// Markup injected into the tooltip's icon container.
    #[must_use]
    pub fn svg(self) -> &'static str {
        match self {
            Self::Sports => icon!(r#"<circle cx="12" cy="12" r="9"/><path d="M12 3a15 15 0 0 1 0 18M3.5 9h17M3.5 15h17"/>"#),
            Self::Cycling => icon!(r#"<circle cx="6" cy="17" r="4"/><circle cx="18" cy="17" r="4"/><path d="M6 17 10 8h4l4 9M10 8 8 5h3"/>"#),
            Self::Park => icon!(r#"<path d="M12 3 7 11h3l-4 6h12l-4-6h3L12 3z"/><path d="M12 17v4"/>"#),
            Self::Kids => icon!(r#"<circle cx="12" cy="7" r="3"/><path d="M5 21c1-5 3.5-7 7-7s6 2 7 7"/>"#),
            Self::Golf => icon!(r#"<path d="M12 3v12M12 3l6 3-6 3"/><ellipse cx="12" cy="19" rx="6" ry="2.5"/>"#),
            Self::Cafe | Self::Restaurant | Self::Bar => icon!(r#"<path d="M5 8h12v5a5 5 0 0 1-10 0V8z"/><path d="M17 9h2a2 2 0 0 1 0 4h-2M7 21h10"/>"#),
            Self::Building | Self::Hotel => icon!(r#"<rect x="6" y="3" width="12" height="18"/><path d="M9 7h2M13 7h2M9 11h2M13 11h2M9 15h2M13 15h2M11 21v-3h2v3"/>"#),
            Self::Road => icon!(r#"<path d="M6 21 10 3M18 21 14 3M12 7v2M12 12v2M12 17v2"/>"#),
            Self::School | Self::University => icon!(r#"<path d="m12 4 10 5-10 5L2 9l10-5z"/><path d="M6 11v5c0 1.5 2.5 3 6 3s6-1.5 6-3v-5"/>"#),
            Self::Convention | Self::Government => icon!(r#"<path d="M3 21h18M5 21V9l7-5 7 5v12M9 21v-6h6v6"/>"#),
            Self::Tech => icon!(r#"<rect x="4" y="5" width="16" height="12" rx="1"/><path d="M8 21h8M12 17v4"/>"#),
            Self::Shopping => icon!(r#"<path d="M6 8h12l-1 13H7L6 8z"/><path d="M9 8a3 3 0 0 1 6 0"/>"#),
            Self::Lake => icon!(r#"<path d="M3 15c2-2 4-2 6 0s4 2 6 0 4-2 6 0M3 19c2-2 4-2 6 0s4 2 6 0 4-2 6 0"/>"#),
            Self::Airport => icon!(r#"<path d="M10.5 20.5 13 14l6-6a1.8 1.8 0 0 0-2.5-2.5l-6 6-6.5 2.5 2 2 4-1.5-1.5 4 2 2z"/>"#),
            Self::Hospital => icon!(r#"<rect x="4" y="4" width="16" height="16" rx="2"/><path d="M12 8v8M8 12h8"/>"#),
            Self::Default => icon!(r#"<circle cx="12" cy="10" r="3"/><path d="M12 21c4-5 7-8.1 7-11a7 7 0 1 0-14 0c0 2.9 3 6 7 11z"/>"#),
        }
    }
}
