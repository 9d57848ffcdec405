//! The 360° panorama viewer component.
//!
//! Rendering is a thin shell: a stage `<div>` the Pannellum engine takes
//! over, the loading overlay, a label badge, and a rotation toggle. All of
//! the imperative work (engine construction, image resolution, rotation)
//! lives in `crate::viewer::ViewerController`, which only exists in the
//! hydrate build; the SSR build renders the same markup with inert
//! handlers.

use leptos::prelude::*;
use panorama::config::ViewerOptions;

use crate::components::loading_overlay::LoadingOverlay;

#[component]
pub fn PanoramaViewer(options: ViewerOptions) -> impl IntoView {
    let is_loading = RwSignal::new(true);
    let is_rotating = RwSignal::new(false);
    let preloader_visible = RwSignal::new(true);
    let text_visible = RwSignal::new(false);
    let label = options.label.clone();
    let gif_url = options.preloader_gif_url.clone();
    let stage_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let controller = {
        use std::cell::Cell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        use crate::viewer::{ViewerController, unique_container_id};

        let container_id = unique_container_id();
        let controller =
            ViewerController::new(container_id.clone(), options, is_loading, is_rotating);

        // The stage id is assigned client-side so multiple viewers can
        // coexist without the server needing to agree on ids.
        let started = Cell::new(false);
        let init_controller = Rc::clone(&controller);
        Effect::new(move |_| {
            if started.get() {
                return;
            }
            let Some(stage) = stage_ref.get() else {
                return;
            };
            started.set(true);
            stage.set_id(&container_id);
            let controller = Rc::clone(&init_controller);
            leptos::task::spawn_local(async move {
                controller.init().await;
            });
        });

        on_cleanup({
            let controller = Rc::clone(&controller);
            move || controller.destroy()
        });

        // Caption fades in shortly after mount, independent of load state.
        Timeout::new(300, move || text_visible.set(true)).forget();

        // Once loading finishes, let the overlay's fade run before it
        // leaves the DOM.
        Effect::new(move |_| {
            if !is_loading.get() {
                Timeout::new(400, move || preloader_visible.set(false)).forget();
            }
        });

        controller
    };

    #[cfg(feature = "hydrate")]
    let on_grab = {
        let controller = std::rc::Rc::clone(&controller);
        move |_: leptos::ev::MouseEvent| controller.handle_user_interaction()
    };
    #[cfg(not(feature = "hydrate"))]
    let on_grab = move |_: leptos::ev::MouseEvent| {};

    #[cfg(feature = "hydrate")]
    let on_touch = {
        let controller = std::rc::Rc::clone(&controller);
        move |_: leptos::ev::TouchEvent| controller.handle_user_interaction()
    };
    #[cfg(not(feature = "hydrate"))]
    let on_touch = move |_: leptos::ev::TouchEvent| {};

    #[cfg(feature = "hydrate")]
    let on_wheel = {
        let controller = std::rc::Rc::clone(&controller);
        move |_: leptos::ev::WheelEvent| controller.handle_user_interaction()
    };
    #[cfg(not(feature = "hydrate"))]
    let on_wheel = move |_: leptos::ev::WheelEvent| {};

    #[cfg(feature = "hydrate")]
    let on_toggle = {
        let controller = std::rc::Rc::clone(&controller);
        move |_: leptos::ev::MouseEvent| {
            if controller.rotation().is_running() {
                controller.stop_rotation();
            } else {
                controller.start_rotation();
            }
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_toggle = move |_: leptos::ev::MouseEvent| {};

    view! {
        <div class="panorama-viewer">
            <LoadingOverlay
                visible=preloader_visible.into()
                loading=is_loading.into()
                text_visible=text_visible.into()
                gif_url=gif_url
            />
            <div
                node_ref=stage_ref
                class="panorama-viewer__stage"
                class=("panorama-viewer__stage--ready", move || !is_loading.get())
                on:mousedown=on_grab
                on:touchstart=on_touch
                on:wheel=on_wheel
            ></div>
            <div class="panorama-viewer__badge">"Viewing: " {label}</div>
            <button
                class="panorama-viewer__rotate-toggle"
                class=("panorama-viewer__rotate-toggle--active", move || is_rotating.get())
                aria-label="Toggle auto-rotation"
                on:click=on_toggle
            >
                {move || {
                    if is_rotating.get() {
                        view! {
                            <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                <path d="M6 5h4v14H6zM14 5h4v14h-4z"/>
                            </svg>
                        }
                            .into_any()
                    } else {
                        view! {
                            <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                <path d="M8 5v14l11-7z"/>
                            </svg>
                        }
                            .into_any()
                    }
                }}
            </button>
        </div>
    }
}
