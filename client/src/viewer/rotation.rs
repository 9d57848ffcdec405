//! Frame-driven auto-rotation.
//!
//! The yaw for each frame comes from `panorama::rotation::RotationSession`
//! (wall-clock based, so speed is refresh-rate independent); this module
//! owns the `requestAnimationFrame` loop and its cancellation.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use panorama::rotation::{RotationSession, SchedulerState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::pannellum::PannellumViewer;

/// Constant-speed yaw rotation with cooperative cancellation.
///
/// At most one session runs per scheduler: `start` is a no-op while
/// running, and replacing the token cancels any prior session before a new
/// one begins. `stop` is idempotent and safe before any `start`.
pub struct RotationScheduler {
    engine: Rc<RefCell<Option<PannellumViewer>>>,
    duration_ms: f64,
    is_rotating: RwSignal<bool>,
    state: RefCell<SchedulerState>,
    raf_id: Cell<Option<i32>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    /// Handle the frame closure upgrades each tick; weak so the closure
    /// never keeps the scheduler alive.
    weak_self: Weak<Self>,
}

impl RotationScheduler {
    pub fn new(
        engine: Rc<RefCell<Option<PannellumViewer>>>,
        duration_ms: f64,
        is_rotating: RwSignal<bool>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|weak| Self {
            engine,
            duration_ms,
            is_rotating,
            state: RefCell::new(SchedulerState::new()),
            raf_id: Cell::new(None),
            frame: RefCell::new(None),
            weak_self: weak.clone(),
        })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    /// Begin rotating from the engine's current yaw. No-op while already
    /// running or before the engine exists.
    pub fn start(&self) {
        let start_yaw = match self.engine.borrow().as_ref() {
            Some(engine) => engine.get_yaw(),
            None => return,
        };

        // Any prior session dies with its token; frames it still has in
        // flight see the cancellation and bail.
        let Some(token) = self.state.borrow_mut().begin() else {
            return;
        };
        self.is_rotating.set(true);

        let session = RotationSession::begin(start_yaw, js_sys::Date::now(), self.duration_ms);
        let weak = self.weak_self.clone();
        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(scheduler) = weak.upgrade() else {
                return;
            };
            if token.is_cancelled() {
                return;
            }
            {
                let engine = scheduler.engine.borrow();
                let Some(engine) = engine.as_ref() else {
                    return;
                };
                engine.set_yaw(session.yaw_at(js_sys::Date::now()));
            }
            scheduler.schedule_frame();
        }) as Box<dyn FnMut(f64)>);
        *self.frame.borrow_mut() = Some(frame);

        self.schedule_frame();
    }

    /// Cancel the pending frame and mark the session dead. Idempotent; safe
    /// from any state.
    pub fn stop(&self) {
        self.state.borrow_mut().stop();
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.frame.borrow_mut().take();
        self.is_rotating.set(false);
    }

    fn schedule_frame(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(frame) = self.frame.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                self.raf_id.set(Some(id));
            }
        }
    }
}
