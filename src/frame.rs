//! Redraw scheduling.
//!
//! Slider input requests a redraw through [`RedrawScheduler`]; at most one
//! request is pending at a time, and a newer request cancels and replaces
//! the older one, so exactly one draw runs per displayed frame. Resize work
//! is debounced separately with a short timeout before the canvas backing
//! store is resynced.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use crate::panel::SharedPanel;
use crate::render;

#[derive(Clone)]
pub struct RedrawScheduler {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<Closure<dyn FnMut()>>,
}

impl RedrawScheduler {
    pub fn new(panel: SharedPanel) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_cb = pending.clone();
        let tick = Rc::new(Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            render::draw_panel(&panel);
        }) as Box<dyn FnMut()>));
        Self { pending, tick }
    }

    /// Schedule a redraw on the next animation frame. Superseded requests
    /// are dropped, not queued.
    pub fn request(&self) {
        let Some(w) = web::window() else { return };
        if let Some(handle) = self.pending.take() {
            _ = w.cancel_animation_frame(handle);
        }
        if let Ok(handle) = w.request_animation_frame(self.tick.as_ref().as_ref().unchecked_ref()) {
            self.pending.set(Some(handle));
        }
    }
}

#[derive(Clone)]
pub struct ResizeDebouncer {
    timer: Rc<Cell<Option<i32>>>,
    fire: Rc<Closure<dyn FnMut()>>,
}

impl ResizeDebouncer {
    pub fn new(canvas: web::HtmlCanvasElement, scheduler: RedrawScheduler) -> Self {
        let timer = Rc::new(Cell::new(None));
        let timer_cb = timer.clone();
        let fire = Rc::new(Closure::wrap(Box::new(move || {
            timer_cb.set(None);
            dom::sync_canvas_backing_size(&canvas);
            scheduler.request();
        }) as Box<dyn FnMut()>));
        Self { timer, fire }
    }

    /// Restart the debounce window; the canvas resync runs once the window
    /// stops moving for `RESIZE_DEBOUNCE_MS`.
    pub fn kick(&self) {
        let Some(w) = web::window() else { return };
        if let Some(handle) = self.timer.take() {
            w.clear_timeout_with_handle(handle);
        }
        if let Ok(handle) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.fire.as_ref().as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            self.timer.set(Some(handle));
        }
    }
}
