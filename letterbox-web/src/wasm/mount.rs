use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::error::WebError;
use crate::page::{CANVAS_ID, ROOT_STYLE};

pub struct Mounted {
    pub canvas: HtmlCanvasElement,
    pub container: HtmlElement,
}

/// Find the root container, center it, and append a fresh canvas.
pub fn mount(document: &Document, root_id: &str) -> Result<Mounted, WebError> {
    let container: HtmlElement = document
        .get_element_by_id(root_id)
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| WebError::MissingRoot(root_id.to_string()))?;

    let style = container.style();
    for (property, value) in ROOT_STYLE {
        style.set_property(property, value)?;
    }

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| WebError::Js("created element is not a canvas".to_string()))?;
    canvas.set_id(CANVAS_ID);
    container.append_child(&canvas)?;

    Ok(Mounted { canvas, container })
}

pub fn webgpu_available(window: &Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu")).unwrap_or(false)
}

/// Replace the whole page with a plain-text message.
pub fn show_diagnostic(document: &Document, message: &str) -> Result<(), WebError> {
    let body = document.body().ok_or(WebError::NoWindow)?;
    body.set_inner_html("");

    let pre = document.create_element("pre")?;
    pre.set_attribute("style", "color:#eee;padding:16px")?;
    pre.set_text_content(Some(message));
    body.append_child(&pre)?;
    Ok(())
}
