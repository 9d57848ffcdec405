//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server is stateless apart from the asset root the static proxy reads
//! from.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory the static proxy is confined to. Also served directly as
    /// the site's public asset tree.
    pub asset_root: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(asset_root: PathBuf) -> Self {
        Self { asset_root }
    }

    /// Resolve the asset root from `ASSET_DIR`, defaulting to the
    /// repository's `public/` directory.
    #[must_use]
    pub fn from_env() -> Self {
        let asset_root = std::env::var("ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));
        Self::new(asset_root)
    }
}
