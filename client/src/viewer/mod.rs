//! Viewer lifecycle controller.
//!
//! ARCHITECTURE
//! ============
//! `ViewerController` is the single owner of everything the panorama viewer
//! allocates imperatively: the Pannellum engine instance, the transient
//! object URL for the panorama image, the per-frame master-plan monitor,
//! the retained tooltip/event closures, and the rotation scheduler. It is
//! constructed when the component mounts and torn down exactly once on
//! unmount; every async step re-checks `mounted` (and the sequence token)
//! afterwards so a teardown mid-flight can never mutate dead state.
//!
//! Initialization is strictly sequential: wait for the engine global →
//! resolve the image → construct the engine → await its load/error event →
//! force the initial orientation → start the overlay monitor → optionally
//! hand off to the rotation scheduler after two staged delays.

pub mod pannellum;
pub mod resolver;
pub mod rotation;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use panorama::camera::overlay_transform;
use panorama::config::{
    FRICTION, HAOV, HOTSPOT_PITCH, LOOK_AT_ANIMATION_MS, MAX_HFOV, MIN_HFOV,
    ROTATION_START_DELAY_MS, SETTLE_DELAY_MS, VAOV, ViewerOptions,
};
use panorama::hotspot::{Hotspot, MASTER_PLAN_HOTSPOT_ID};
use panorama::resolve;
use panorama::rotation::CancelToken;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlImageElement, MouseEvent};

use pannellum::PannellumViewer;
use rotation::RotationScheduler;

/// Outcome of waiting for the engine to come up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineEvent {
    Loaded,
    Failed,
}

pub struct ViewerController {
    container_id: String,
    opts: ViewerOptions,
    mounted: Cell<bool>,
    engine: Rc<RefCell<Option<PannellumViewer>>>,
    /// Transient object URL for the panorama image; revoked exactly once.
    object_url: RefCell<Option<String>>,
    monitor_raf: Cell<Option<i32>>,
    monitor_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    /// createTooltipFunc closures; Pannellum keeps raw function pointers,
    /// so these must outlive the engine instance.
    tooltip_closures: RefCell<Vec<Closure<dyn FnMut(HtmlElement)>>>,
    /// Hotspot click handlers (external links).
    click_closures: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>,
    /// "load"/"error" subscriptions.
    event_closures: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
    /// Cancels the staged settle → lookAt → rotate sequence.
    seq_token: RefCell<CancelToken>,
    rotation: Rc<RotationScheduler>,
    is_loading: RwSignal<bool>,
    /// Upgraded by the monitor/timeout/tooltip closures; weak so none of
    /// them keeps a torn-down controller alive.
    weak_self: Weak<Self>,
}

impl ViewerController {
    #[must_use]
    pub fn new(
        container_id: String,
        opts: ViewerOptions,
        is_loading: RwSignal<bool>,
        is_rotating: RwSignal<bool>,
    ) -> Rc<Self> {
        let engine = Rc::new(RefCell::new(None::<PannellumViewer>));
        let rotation =
            RotationScheduler::new(Rc::clone(&engine), opts.rotation_duration_ms, is_rotating);
        Rc::new_cyclic(|weak| Self {
            container_id,
            opts,
            mounted: Cell::new(true),
            engine,
            object_url: RefCell::new(None),
            monitor_raf: Cell::new(None),
            monitor_frame: RefCell::new(None),
            tooltip_closures: RefCell::new(Vec::new()),
            click_closures: RefCell::new(Vec::new()),
            event_closures: RefCell::new(Vec::new()),
            seq_token: RefCell::new(CancelToken::new()),
            rotation,
            is_loading,
            weak_self: weak.clone(),
        })
    }

    /// Run the full initialization sequence. Any failure is logged and
    /// degrades to "not loading"; the user never sees a stuck spinner or
    /// a thrown error.
    pub async fn init(self: Rc<Self>) {
        if let Err(err) = Rc::clone(&self).try_init().await {
            log::error!("failed to initialize panorama viewer: {err:?}");
            if self.mounted.get() {
                self.is_loading.set(false);
            }
        }
    }

    async fn try_init(self: Rc<Self>) -> Result<(), JsValue> {
        pannellum::wait_for_engine().await;
        if !self.mounted.get() {
            return Ok(());
        }

        let resolved = resolver::acquire_panorama(&self.opts.panorama_url).await;
        if !self.mounted.get() {
            // Unmounted mid-resolution: the handle is ours to release.
            if resolved.is_transient() {
                resolver::release_object_url(resolved.as_str());
            }
            return Ok(());
        }
        if resolved.is_transient() {
            *self.object_url.borrow_mut() = Some(resolved.as_str().to_owned());
        }

        let config = self.build_config(&resolved);
        log::debug!("initializing pannellum with {}", resolved.as_str());
        let engine = pannellum::create_viewer(&self.container_id, &config)?;
        let ready = self.subscribe_engine_events(&engine);
        *self.engine.borrow_mut() = Some(engine);

        let event = Self::await_engine(ready).await;
        if !self.mounted.get() {
            return Ok(());
        }
        self.is_loading.set(false);
        if event == EngineEvent::Failed {
            return Ok(());
        }

        // Force the configured orientation; the engine may have computed
        // its own during load.
        if let Some(engine) = self.engine.borrow().as_ref() {
            engine.set_pitch(self.opts.initial_pitch);
            engine.set_yaw(self.opts.initial_yaw);
            engine.set_hfov(self.opts.initial_hfov);
        }

        self.start_monitor();
        if self.opts.auto_rotate {
            self.schedule_auto_rotate();
        }
        Ok(())
    }

    /// User grabbed or zoomed the view: kill the pending auto sequence and
    /// any running rotation.
    pub fn handle_user_interaction(&self) {
        self.seq_token.borrow().cancel();
        self.rotation.stop();
    }

    /// Start rotating from the current yaw (manual control button).
    pub fn start_rotation(&self) {
        self.seq_token.borrow().cancel();
        self.rotation.start();
    }

    pub fn stop_rotation(&self) {
        self.handle_user_interaction();
    }

    #[must_use]
    pub fn rotation(&self) -> &Rc<RotationScheduler> {
        &self.rotation
    }

    /// Tear everything down: frames, rotation, engine, object URL. Safe to
    /// call once from `on_cleanup`.
    pub fn destroy(&self) {
        self.mounted.set(false);
        self.seq_token.borrow().cancel();
        self.rotation.stop();

        if let Some(id) = self.monitor_raf.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.monitor_frame.borrow_mut().take();

        if let Some(engine) = self.engine.borrow_mut().take() {
            if let Err(err) = engine.destroy() {
                log::debug!("engine destroy threw: {err:?}");
            }
        }

        self.tooltip_closures.borrow_mut().clear();
        self.click_closures.borrow_mut().clear();
        self.event_closures.borrow_mut().clear();

        if let Some(url) = self.object_url.borrow_mut().take() {
            resolver::release_object_url(&url);
        }
    }

    // --- engine events ---

    /// Convert the push-style "load"/"error" callbacks into a one-shot
    /// promise the init sequence awaits. "error" keeps logging afterwards;
    /// the first event of either kind settles the promise.
    fn subscribe_engine_events(&self, engine: &PannellumViewer) -> js_sys::Promise {
        let settle: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
        let promise = {
            let settle = Rc::clone(&settle);
            js_sys::Promise::new(&mut move |resolve, _reject| {
                *settle.borrow_mut() = Some(resolve);
            })
        };

        let on_load = {
            let settle = Rc::clone(&settle);
            Closure::wrap(Box::new(move |_arg: JsValue| {
                if let Some(resolve) = settle.borrow_mut().take() {
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        engine.on("load", on_load.as_ref().unchecked_ref());

        let on_error = {
            let settle = Rc::clone(&settle);
            let is_loading = self.is_loading;
            Closure::wrap(Box::new(move |msg: JsValue| {
                log::error!("pannellum viewer error: {msg:?}");
                // Clear the spinner even when load never arrives.
                is_loading.set(false);
                if let Some(resolve) = settle.borrow_mut().take() {
                    let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
                }
            }) as Box<dyn FnMut(JsValue)>)
        };
        engine.on("error", on_error.as_ref().unchecked_ref());

        self.event_closures.borrow_mut().push(on_load);
        self.event_closures.borrow_mut().push(on_error);
        promise
    }

    async fn await_engine(ready: js_sys::Promise) -> EngineEvent {
        match JsFuture::from(ready).await {
            Ok(value) if value.as_bool() == Some(true) => EngineEvent::Loaded,
            _ => EngineEvent::Failed,
        }
    }

    // --- master-plan overlay monitor ---

    /// Per-frame sync of the master-plan overlay to the live camera. The
    /// engine emits no continuous camera event, so this has to be a real
    /// animation-frame loop, not an event subscription.
    fn start_monitor(&self) {
        let weak = self.weak_self.clone();
        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if !controller.mounted.get() {
                return;
            }
            controller.sync_master_plan();
            controller.schedule_monitor_frame();
        }) as Box<dyn FnMut(f64)>);
        *self.monitor_frame.borrow_mut() = Some(frame);
        self.schedule_monitor_frame();
    }

    fn schedule_monitor_frame(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(frame) = self.monitor_frame.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                self.monitor_raf.set(Some(id));
            }
        }
    }

    fn sync_master_plan(&self) {
        let (yaw, hfov) = {
            let engine = self.engine.borrow();
            let Some(engine) = engine.as_ref() else {
                return;
            };
            (engine.get_yaw(), engine.get_hfov())
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(element)) = document.query_selector("[data-master-plan-img=\"true\"]") else {
            return;
        };
        let Ok(img) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        let css = overlay_transform(self.opts.initial_hfov, yaw, hfov).to_css();
        let _ = img.style().set_property("transform", &css);
    }

    // --- auto-rotation sequence ---

    /// Settle at the nadir, glide up to the hotspot pitch, then hand off to
    /// the rotation scheduler. Both delays re-check the token and mount
    /// flag before acting.
    fn schedule_auto_rotate(&self) {
        let token = self.seq_token.borrow().clone();
        let weak = self.weak_self.clone();
        Timeout::new(SETTLE_DELAY_MS, move || {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if token.is_cancelled() || !controller.mounted.get() {
                return;
            }
            if let Some(engine) = controller.engine.borrow().as_ref() {
                engine.look_at(
                    HOTSPOT_PITCH,
                    controller.opts.initial_yaw,
                    controller.opts.initial_hfov,
                    LOOK_AT_ANIMATION_MS,
                );
            }
            let weak2 = weak.clone();
            let token2 = token.clone();
            Timeout::new(ROTATION_START_DELAY_MS, move || {
                let Some(controller) = weak2.upgrade() else {
                    return;
                };
                if token2.is_cancelled() || !controller.mounted.get() {
                    return;
                }
                controller.rotation.start();
            })
            .forget();
        })
        .forget();
    }

    // --- engine configuration ---

    fn build_config(&self, resolved: &resolve::ResolvedImage) -> JsValue {
        let config = js_sys::Object::new();
        set(&config, "type", &JsValue::from_str("equirectangular"));
        set(&config, "panorama", &JsValue::from_str(resolved.as_str()));
        set(&config, "pitch", &JsValue::from_f64(self.opts.initial_pitch));
        set(&config, "yaw", &JsValue::from_f64(self.opts.initial_yaw));
        set(&config, "hfov", &JsValue::from_f64(self.opts.initial_hfov));
        set(&config, "minHfov", &JsValue::from_f64(MIN_HFOV));
        set(&config, "maxHfov", &JsValue::from_f64(MAX_HFOV));
        set(&config, "autoLoad", &JsValue::TRUE);
        set(&config, "showControls", &JsValue::TRUE);
        set(&config, "compass", &JsValue::TRUE);
        set(&config, "friction", &JsValue::from_f64(FRICTION));
        set(&config, "draggable", &JsValue::TRUE);
        set(&config, "mouseZoom", &JsValue::TRUE);
        set(&config, "doubleClickZoom", &JsValue::TRUE);
        set(&config, "vaov", &JsValue::from_f64(VAOV));
        set(&config, "haov", &JsValue::from_f64(HAOV));
        let background = js_sys::Array::of3(
            &JsValue::from_f64(0.0),
            &JsValue::from_f64(0.0),
            &JsValue::from_f64(0.0),
        );
        set(&config, "backgroundColor", background.as_ref());
        set(&config, "dynamicUpdate", &JsValue::TRUE);
        // The engine's own auto-rotate stays off; the scheduler owns it.
        set(&config, "autoRotate", &JsValue::from_f64(0.0));
        set(&config, "autoRotateInactivityDelay", &JsValue::from_f64(-1.0));
        set(&config, "autoRotateStopDelay", &JsValue::from_f64(-1.0));
        set(&config, "orientationOnByDefault", &JsValue::FALSE);
        set(&config, "showZoomCtrl", &JsValue::TRUE);
        set(&config, "hotSpots", self.build_hotspot_configs().as_ref());

        if resolve::needs_cross_origin(resolved.as_str(), &page_url()) {
            set(&config, "crossOrigin", &JsValue::from_str("anonymous"));
        }

        config.into()
    }

    fn build_hotspot_configs(&self) -> js_sys::Array {
        let configs = js_sys::Array::new();
        for hotspot in self.opts.engine_hotspots() {
            let entry = js_sys::Object::new();
            set(&entry, "pitch", &JsValue::from_f64(hotspot.pitch));
            set(&entry, "yaw", &JsValue::from_f64(hotspot.yaw));

            let tooltip: Closure<dyn FnMut(HtmlElement)> =
                if hotspot.id == MASTER_PLAN_HOTSPOT_ID {
                    set(&entry, "cssClass", &JsValue::from_str("master-plan-hotspot"));
                    let url = self.opts.master_plan_url.clone().unwrap_or_default();
                    Closure::wrap(Box::new(move |div: HtmlElement| {
                        if let Err(err) = decorate_master_plan_hotspot(&div, &url) {
                            log::debug!("master-plan tooltip build failed: {err:?}");
                        }
                    }) as Box<dyn FnMut(HtmlElement)>)
                } else {
                    set(&entry, "cssClass", &JsValue::from_str("label-hotspot"));
                    let weak = self.weak_self.clone();
                    Closure::wrap(Box::new(move |div: HtmlElement| {
                        match decorate_label_hotspot(&div, &hotspot) {
                            Ok(Some(click)) => {
                                if let Some(controller) = weak.upgrade() {
                                    controller.click_closures.borrow_mut().push(click);
                                }
                            }
                            Ok(None) => {}
                            Err(err) => log::debug!("hotspot tooltip build failed: {err:?}"),
                        }
                    }) as Box<dyn FnMut(HtmlElement)>)
                };

            set(&entry, "createTooltipFunc", tooltip.as_ref().unchecked_ref());
            self.tooltip_closures.borrow_mut().push(tooltip);
            configs.push(entry.as_ref());
        }
        configs
    }
}

/// Populate a label hotspot tooltip: icon, connector, title/distance text,
/// anchor dot, and an optional external-link click handler (returned so
/// the controller can keep it alive).
fn decorate_label_hotspot(
    div: &HtmlElement,
    hotspot: &Hotspot,
) -> Result<Option<Closure<dyn FnMut(MouseEvent)>>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    div.class_list().add_1("label-hotspot")?;
    if !hotspot.id.is_empty() {
        div.set_id(&hotspot.id);
    }
    if hotspot.highlight {
        div.class_list().add_1("highlight")?;
    }

    let icon = document.create_element("div")?;
    icon.set_class_name("hotspot-icon");
    icon.set_inner_html(hotspot.icon.svg());
    div.append_child(&icon)?;

    let connector = document.create_element("div")?;
    connector.set_class_name("hotspot-connector");
    div.append_child(&connector)?;

    let text = document.create_element("div")?;
    text.set_class_name("label-hotspot-text");
    text.set_inner_html(&format!(
        "<p>{}</p><small>{}</small>",
        hotspot.title, hotspot.distance
    ));
    div.append_child(&text)?;

    let dot = document.create_element("div")?;
    dot.set_class_name("hotspot-dot");
    div.append_child(&dot)?;

    if let Some(link) = hotspot.link.clone() {
        div.style().set_property("cursor", "pointer")?;
        let click = Closure::wrap(Box::new(move |ev: MouseEvent| {
            ev.stop_propagation();
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&link, "_blank");
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        div.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        return Ok(Some(click));
    }
    Ok(None)
}

/// Populate the nadir hotspot with the master-plan image the monitor keeps
/// rotation/scale-locked to the camera.
fn decorate_master_plan_hotspot(div: &HtmlElement, master_plan_url: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    div.class_list().add_1("master-plan-hotspot")?;
    div.set_attribute("data-rotation-sync", "true")?;

    let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    img.set_src(master_plan_url);
    let style = img.style();
    style.set_property("max-width", "700px")?;
    style.set_property("width", "auto")?;
    style.set_property("height", "auto")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("margin-left", "25px")?;
    style.set_property("transition", "transform 0.05s linear")?;
    img.set_attribute("data-master-plan-img", "true")?;
    div.append_child(&img)?;
    Ok(())
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target.as_ref(), &JsValue::from_str(key), value);
}

fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| "http://localhost/".to_owned())
}

/// Fresh unique container id per component instance.
#[must_use]
pub fn unique_container_id() -> String {
    format!("panorama-container-{}", uuid::Uuid::new_v4().simple())
}
