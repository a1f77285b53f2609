#![cfg(target_arch = "wasm32")]
use friction_core::{ParameterStore, ViewSync};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod controls;
mod dom;
mod ids;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("friction-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, ids::CANVAS_ID)?;
    let surface = canvas::CanvasSurface::new(canvas)?;
    let view = controls::DomView::bind(&document, surface)?;

    let store = ParameterStore::new(view.slider_ranges());
    let sync = ViewSync::new(store);

    let app = Rc::new(RefCell::new(controls::App { sync, view }));
    {
        let mut app = app.borrow_mut();
        let controls::App { sync, view } = &mut *app;
        sync.initialize(view);
    }
    controls::wire_controls(&app);

    log::info!("[init] controls bound, initial plot drawn");
    Ok(())
}
