//! Full-screen panorama page: the 200 m rooftop view with the master-plan
//! overlay and surrounding-landmark hotspots.

use leptos::prelude::*;
use panorama::config::ViewerOptions;

use crate::components::nav::NavBar;
use crate::components::panorama_viewer::PanoramaViewer;

#[component]
pub fn MapsPage() -> impl IntoView {
    let mut options = ViewerOptions::new("/images/360/200m.jpg");
    options.master_plan_url = Some("/images/master-plan.png".to_owned());
    options.preloader_gif_url = Some("/images/preloader.gif".to_owned());

    view! {
        <div class="maps-page">
            <NavBar/>
            <div class="maps-page__viewer">
                <PanoramaViewer options=options/>
            </div>
        </div>
    }
}
