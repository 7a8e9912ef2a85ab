use letterbox_core::{BackingSize, CssSize, Rect, Surface, Viewport};
use web_sys::{HtmlCanvasElement, HtmlElement, Window};

use crate::page::css_px;

/// `<canvas>` as a coordinator surface. `width`/`height` attributes are the
/// backing size; the inline style carries the CSS size.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Surface for CanvasSurface {
    type Handle = HtmlCanvasElement;

    fn backing_size(&self) -> BackingSize {
        BackingSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn set_css_size(&mut self, size: CssSize) {
        let style = self.canvas.style();
        let result = style
            .set_property("width", &css_px(size.width))
            .and_then(|()| style.set_property("height", &css_px(size.height)));
        if let Err(err) = result {
            tracing::warn!("failed to set canvas CSS size: {err:?}");
        }
    }

    fn handle(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }
}

pub struct ContainerViewport {
    window: Window,
    container: HtmlElement,
}

impl ContainerViewport {
    pub fn new(window: Window, container: HtmlElement) -> Self {
        Self { window, container }
    }
}

impl Viewport for ContainerViewport {
    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn container_rect(&self) -> Rect {
        let rect = self.container.get_bounding_client_rect();
        Rect::new(rect.width(), rect.height())
    }
}
