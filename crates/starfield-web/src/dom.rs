use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!(format!("{:?}", e))
}

pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document(window: &web::Window) -> Result<web::Document> {
    window.document().ok_or_else(|| anyhow!("no document"))
}

/// Viewport dimensions in CSS pixels, the coordinate space the whole
/// simulation works in.
pub fn viewport_size(window: &web::Window) -> Result<(f32, f32)> {
    let width = window
        .inner_width()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(js_err)?
        .as_f64()
        .ok_or_else(|| anyhow!("innerHeight is not a number"))?;
    Ok((width as f32, height as f32))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id} canvas element"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{id} is not a canvas"))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("not a 2d context"))
}
