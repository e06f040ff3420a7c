// Access to the page the demos draw into

use crate::error::RenderError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, RenderError> {
    web_sys::window().ok_or(RenderError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, RenderError> {
    window.document().ok_or(RenderError::NoDocument)
}

// Full-window canvas appended to <body>
pub fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, RenderError> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::ResourceCreation("canvas element"))?;
    let body = document.body().ok_or(RenderError::NoBody)?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

pub fn inner_size(window: &Window) -> Result<(u32, u32), RenderError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}
