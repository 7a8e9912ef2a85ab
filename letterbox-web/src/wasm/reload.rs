use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventSource;

use crate::error::WebError;

/// Reload the page on every `reload` event from the `letterbox-dev` server,
/// e.g. `http://127.0.0.1:5174/__letterbox/reload`.
pub fn connect_reload(url: &str) -> Result<(), WebError> {
    let source = EventSource::new(url)?;

    let on_reload = Closure::<dyn FnMut()>::new(|| {
        tracing::info!("rebuild finished, reloading page");
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                tracing::warn!("page reload failed: {err:?}");
            }
        }
    });
    source.add_event_listener_with_callback("reload", on_reload.as_ref().unchecked_ref())?;

    // Both live until the page unloads.
    on_reload.forget();
    std::mem::forget(source);

    tracing::debug!(url, "listening for dev reloads");
    Ok(())
}
