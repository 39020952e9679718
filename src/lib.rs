#![cfg(target_arch = "wasm32")]
//! Interactive thin-lens optical bench.
//!
//! The pure math and layout live under [`core`]; everything else is the
//! web front-end gluing sliders, readouts and the canvas together.

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod panel;
mod render;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lens-bench starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    panel::mount_root(&document)
}
