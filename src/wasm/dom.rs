use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, HtmlElement, Window};

use crate::scroll::{progress_from_offsets, OverlayStyle};

/// Device pixel ratio is capped so 3x phones do not triple the fill cost.
const MAX_DPR: f64 = 2.0;

/// Normalized scroll position of the page.
pub fn page_scroll_progress(window: &Window) -> f32 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    progress_from_offsets(offset as f32, content as f32, viewport as f32)
}

/// Match the canvas backing store to its CSS size. Returns the CSS size.
pub fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let dpr = window.device_pixel_ratio().clamp(1.0, MAX_DPR);
    canvas.set_width((w * dpr).round().max(1.0) as u32);
    canvas.set_height((h * dpr).round().max(1.0) as u32);
    (w as f32, h as f32)
}

pub fn apply_overlay_style(el: &HtmlElement, style: &OverlayStyle) -> Result<(), JsValue> {
    let css = el.style();
    css.set_property("opacity", &style.css_opacity())?;
    css.set_property("transform", &style.css_transform())?;
    css.set_property("pointer-events", style.css_pointer_events())?;
    css.set_property("visibility", style.css_visibility())?;
    Ok(())
}

pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}
