#![cfg(target_arch = "wasm32")]
//! WASM entry point: finds the starfield canvas, builds the simulation, wires
//! events, and drives the frame loop.

mod dom;
mod events;
mod frame;
mod render;

use starfield_core::{FieldConfig, Starfield};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "starfieldCanvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web loaded");
    Ok(())
}

/// Running starfield instance handed back to the page.
#[wasm_bindgen]
pub struct StarfieldHandle {
    running: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<events::ListenerGuard>>>,
}

#[wasm_bindgen]
impl StarfieldHandle {
    /// Halt frame scheduling and unregister every event listener.
    pub fn stop(&self) {
        self.running.set(false);
        self.listeners.borrow_mut().clear();
        log::info!("starfield stopped");
    }
}

/// Start the starfield on the `#starfieldCanvas` element.
///
/// A missing or non-canvas element is fatal for this component only: the
/// error is logged and surfaced to the caller, and no animation loop starts.
#[wasm_bindgen(js_name = startStarfield)]
pub fn start_starfield() -> Result<StarfieldHandle, JsValue> {
    init().map_err(|e| {
        log::error!("starfield init error: {e:?}");
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn init() -> anyhow::Result<StarfieldHandle> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    let (width, height) = dom::viewport_size(&window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(Starfield::new(
        FieldConfig::default(),
        width,
        height,
        seed,
    )));
    let renderer = render::CanvasRenderer::new(canvas.clone())?;
    let listeners = events::wire_handlers(&window, &canvas, field.clone())?;

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, renderer }));
    frame::start_loop(frame_ctx, running.clone());

    Ok(StarfieldHandle {
        running,
        listeners: Rc::new(RefCell::new(listeners)),
    })
}
