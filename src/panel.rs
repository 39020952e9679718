//! Panel registry and lens-bench wiring.
//!
//! Panels are a closed set dispatched through one `match`; hosts select a
//! panel by name via the `data-panel` attribute on the mount container.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use web_sys as web;

use crate::core::optics::OpticalParameters;
use crate::{dom, events, frame, overlay};

pub const PANEL_ROOT_ID: &str = "panel-root";
pub const CANVAS_ID: &str = "bench-canvas";
pub const FOCAL_SLIDER_ID: &str = "focal-slider";
pub const DISTANCE_SLIDER_ID: &str = "distance-slider";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    LensBench,
}

impl PanelKind {
    pub fn from_name(name: &str) -> Option<PanelKind> {
        match name {
            "lens-bench" => Some(PanelKind::LensBench),
            _ => None,
        }
    }
}

/// Mutable state of one mounted bench: the drawing target plus the two
/// slider values. Everything drawn is recomputed from these on each frame.
pub struct LensBenchPanel {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub params: OpticalParameters,
}

pub type SharedPanel = Rc<RefCell<LensBenchPanel>>;

/// Mount whichever panel the root container asks for (default lens-bench).
pub fn mount_root(document: &web::Document) -> anyhow::Result<()> {
    let name = document
        .get_element_by_id(PANEL_ROOT_ID)
        .and_then(|el| el.get_attribute("data-panel"))
        .unwrap_or_else(|| "lens-bench".to_string());
    let kind = PanelKind::from_name(&name).ok_or_else(|| anyhow!("unknown panel {name:?}"))?;
    match kind {
        PanelKind::LensBench => mount_lens_bench(document),
    }
}

fn mount_lens_bench(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    dom::sync_canvas_backing_size(&canvas);

    // Seed state from the sliders when present so DOM and state agree from
    // the first frame.
    let defaults = OpticalParameters::default();
    let f = dom::input_by_id(document, FOCAL_SLIDER_ID)
        .map(|i| i.value_as_number())
        .unwrap_or(defaults.f_mm);
    let d_o = dom::input_by_id(document, DISTANCE_SLIDER_ID)
        .map(|i| i.value_as_number())
        .unwrap_or(defaults.object_distance_mm);
    let params = if f.is_finite() && d_o.is_finite() {
        OpticalParameters::clamped(f, d_o)
    } else {
        defaults
    };

    let panel: SharedPanel = Rc::new(RefCell::new(LensBenchPanel {
        canvas: canvas.clone(),
        ctx,
        params,
    }));

    let scheduler = frame::RedrawScheduler::new(panel.clone());
    events::wire_sliders(document, &panel, &scheduler)?;
    events::wire_resize(frame::ResizeDebouncer::new(canvas, scheduler.clone()));
    overlay::update_readouts(document, &params);
    scheduler.request();
    log::info!(
        "[panel] lens bench mounted (f={} mm, d_o={} mm)",
        params.f_mm,
        params.object_distance_mm
    );
    Ok(())
}
