use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Promise;
use letterbox_core::{FrameClock, NextFrame};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Performance, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` + `performance.now()`.
///
/// The callback is installed after construction because it needs the
/// coordinator that owns this clock.
#[derive(Clone)]
pub struct AnimationFrames {
    window: Window,
    performance: Option<Performance>,
    callback: FrameCallback,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        let performance = window.performance();
        Self {
            window,
            performance,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_callback(&self, f: impl FnMut() + 'static) {
        *self.callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(f));
    }
}

impl FrameClock for AnimationFrames {
    fn request_frame(&mut self) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            tracing::warn!("animation frame requested before the callback was installed");
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            tracing::warn!("requestAnimationFrame failed: {err:?}");
        }
    }

    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// Awaitable animation frame for the readiness poll.
pub struct BrowserFrames {
    window: Window,
}

impl BrowserFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl NextFrame for BrowserFrames {
    async fn next_frame(&self) {
        let window = self.window.clone();
        let promise = Promise::new(&mut |resolve, _reject| {
            if window.request_animation_frame(&resolve).is_err() {
                // No frames (e.g. hidden iframe); resolve now rather than hang.
                if let Err(err) = resolve.call0(&JsValue::NULL) {
                    tracing::trace!("frame wait resolve failed: {err:?}");
                }
            }
        });
        if let Err(err) = JsFuture::from(promise).await {
            tracing::warn!("animation frame wait failed: {err:?}");
        }
    }
}
