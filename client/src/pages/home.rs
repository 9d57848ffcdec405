//! Landing page shell. The marketing sections proper are static content;
//! the engineering lives behind the Maps link.

use leptos::prelude::*;

use crate::components::nav::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <NavBar/>
            <section class="home-page__hero">
                <h1 class="home-page__title">"Mirai"</h1>
                <p class="home-page__tagline">"Residences above the skyline."</p>
                <a class="home-page__cta" href="/maps">
                    "Explore the 360\u{b0} view"
                </a>
            </section>
        </div>
    }
}
