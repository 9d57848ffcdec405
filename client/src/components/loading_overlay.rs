//! Full-screen preloader shown until the panorama engine reports "load".
//!
//! No technical error text is ever rendered here: a failed viewer degrades
//! to an empty stage with a logged diagnostic, never a visible crash.

use leptos::prelude::*;

/// Loading overlay with a GIF (when configured) or an animated CSS
/// fallback spinner.
#[component]
pub fn LoadingOverlay(
    /// Whether the overlay is still in the DOM.
    visible: Signal<bool>,
    /// Whether the underlying content is still loading; drives the fade.
    loading: Signal<bool>,
    /// Whether the caption has faded in yet.
    text_visible: Signal<bool>,
    /// Optional preloader GIF URL.
    #[prop(optional_no_strip)]
    gif_url: Option<String>,
) -> impl IntoView {
    move || {
        if !visible.get() {
            return None;
        }
        let spinner = match &gif_url {
            Some(url) => view! {
                <img class="loading-overlay__gif" src=url.clone() alt="Loading\u{2026}"/>
            }
            .into_any(),
            None => view! {
                <div class="loading-overlay__spinner">
                    <div class="loading-overlay__ring"></div>
                    <div class="loading-overlay__ring loading-overlay__ring--slow"></div>
                </div>
            }
            .into_any(),
        };
        Some(view! {
            <div class="loading-overlay" class=("loading-overlay--done", move || !loading.get())>
                <div class="loading-overlay__body">
                    {spinner}
                    <div
                        class="loading-overlay__text"
                        class=("loading-overlay__text--visible", move || text_visible.get())
                    >
                        "Relax \u{2014} bring a cup of coffee and enjoy the view."
                    </div>
                </div>
            </div>
        })
    }
}
