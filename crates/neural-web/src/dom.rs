use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_and_document() -> Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

/// High-resolution timestamp on the same clock as `requestAnimationFrame`.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn has_touch() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &"ontouchstart".into()).unwrap_or(false))
        .unwrap_or(false)
}

/// Match the canvas backing store to its layout size and return it.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn canvases_by_selector(
    document: &web::Document,
    selector: &str,
) -> Result<Vec<web::HtmlCanvasElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        .collect())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}
