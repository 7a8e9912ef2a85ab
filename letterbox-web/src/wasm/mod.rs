use std::cell::RefCell;
use std::rc::Rc;

use letterbox_core::{CoordinatorConfig, RenderLoop, SurfaceCoordinator};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, ResizeObserver, Window};

use crate::error::WebError;
use crate::page::WEBGPU_UNAVAILABLE;

mod canvas;
mod frames;
mod logging;
mod mount;
#[cfg(feature = "dev-reload")]
mod reload;

pub use canvas::{CanvasSurface, ContainerViewport};
pub use frames::{AnimationFrames, BrowserFrames};
pub use logging::install_logging;
pub use mount::{Mounted, mount, show_diagnostic, webgpu_available};
#[cfg(feature = "dev-reload")]
pub use reload::connect_reload;

pub type CanvasCoordinator = SurfaceCoordinator<CanvasSurface, ContainerViewport, AnimationFrames>;

/// Mount a canvas under `#root_id`, keep it sized, and hand it to `module`
/// once it has a nonzero backing size.
///
/// Fails before any await if WebGPU is missing (after replacing the page
/// with a diagnostic) or if the root element does not exist.
pub async fn start<M>(root_id: &str, config: CoordinatorConfig, module: M) -> Result<(), WebError>
where
    M: RenderLoop<HtmlCanvasElement>,
{
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoWindow)?;

    if !webgpu_available(&window) {
        show_diagnostic(&document, WEBGPU_UNAVAILABLE)?;
        return Err(WebError::WebGpuUnavailable);
    }
    config.validate()?;

    let Mounted { canvas, container } = mount(&document, root_id)?;

    let frames = AnimationFrames::new(window.clone());
    let coordinator: Rc<RefCell<CanvasCoordinator>> = Rc::new(RefCell::new(SurfaceCoordinator::new(
        CanvasSurface::new(canvas),
        ContainerViewport::new(window.clone(), container.clone()),
        frames.clone(),
        config,
    )));

    // The coordinator lives until the page unloads; the closures below keep it.
    {
        let coordinator = coordinator.clone();
        frames.set_callback(move || {
            coordinator.borrow_mut().on_animation_frame();
        });
    }
    listen_for_resize(&window, &container, &coordinator)?;

    letterbox_core::start(&*coordinator, &BrowserFrames::new(window), module).await?;
    Ok(())
}

/// Window `resize` and container `ResizeObserver` both run a resize pass.
fn listen_for_resize(
    window: &Window,
    container: &HtmlElement,
    coordinator: &Rc<RefCell<CanvasCoordinator>>,
) -> Result<(), WebError> {
    let coordinator = coordinator.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || match coordinator.try_borrow_mut() {
        Ok(mut coordinator) => {
            coordinator.resize();
        }
        Err(_) => tracing::trace!("coordinator busy, dropping resize event"),
    });

    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
    observer.observe(container);

    on_resize.forget();
    std::mem::forget(observer);
    Ok(())
}

/// Install logging and run [`start`] on the microtask queue, logging any
/// failure. Intended for a render module's `#[wasm_bindgen(start)]`.
pub fn spawn_start<M>(root_id: &str, config: CoordinatorConfig, module: M)
where
    M: RenderLoop<HtmlCanvasElement> + 'static,
{
    install_logging(tracing::Level::INFO);
    let root_id = root_id.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = start(&root_id, config, module).await {
            tracing::error!("letterbox start failed: {err}");
        }
    });
}
