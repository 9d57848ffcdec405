//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, maps::MapsPage};

/// Pannellum engine assets, loaded from CDN. The viewer controller polls
/// for the global before constructing an engine instance.
pub const PANNELLUM_JS: &str = "https://cdn.jsdelivr.net/npm/pannellum@2.5.6/build/pannellum.js";
pub const PANNELLUM_CSS: &str = "https://cdn.jsdelivr.net/npm/pannellum@2.5.6/build/pannellum.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=PANNELLUM_CSS/>
                <script src=PANNELLUM_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mirai-site.css"/>
        <Title text="Mirai Residences"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("maps") view=MapsPage/>
            </Routes>
        </Router>
    }
}
