pub mod loading_overlay;
pub mod nav;
pub mod panorama_viewer;
