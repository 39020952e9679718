//! Slider and window-resize wiring.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::optics::OpticalParameters;
use crate::dom;
use crate::frame::{RedrawScheduler, ResizeDebouncer};
use crate::overlay;
use crate::panel::{SharedPanel, DISTANCE_SLIDER_ID, FOCAL_SLIDER_ID};

pub fn wire_sliders(
    document: &web::Document,
    panel: &SharedPanel,
    scheduler: &RedrawScheduler,
) -> anyhow::Result<()> {
    wire_slider(document, FOCAL_SLIDER_ID, panel, scheduler, |p, v| {
        p.f_mm = v;
    })?;
    wire_slider(document, DISTANCE_SLIDER_ID, panel, scheduler, |p, v| {
        p.object_distance_mm = v;
    })?;
    Ok(())
}

fn wire_slider(
    document: &web::Document,
    id: &str,
    panel: &SharedPanel,
    scheduler: &RedrawScheduler,
    apply: impl Fn(&mut OpticalParameters, f64) + 'static,
) -> anyhow::Result<()> {
    let input = dom::input_by_id(document, id)?;
    let input_cb = input.clone();
    let document = document.clone();
    let panel = panel.clone();
    let scheduler = scheduler.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let value = input_cb.value_as_number();
        if !value.is_finite() {
            return;
        }
        let params = {
            let mut p = panel.borrow_mut();
            apply(&mut p.params, value);
            p.params = OpticalParameters::clamped(p.params.f_mm, p.params.object_distance_mm);
            p.params
        };
        overlay::update_readouts(&document, &params);
        scheduler.request();
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("listener error on #{id}: {e:?}"))?;
    closure.forget();
    Ok(())
}

pub fn wire_resize(debouncer: ResizeDebouncer) {
    let Some(window) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move || debouncer.kick()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
