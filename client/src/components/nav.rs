use leptos::prelude::*;

/// Top navigation bar shared by all pages.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"MIRAI"</a>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href="/">"Home"</a>
                <a class="nav-bar__link" href="/maps">"360\u{b0} View"</a>
            </div>
        </nav>
    }
}
