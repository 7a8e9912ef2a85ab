//! Render-loop side of the hook contract.
//!
//! The render loop keeps one clone and polls it once per frame; the other
//! clone goes to the coordinator as its `RenderHooks`.

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::sanitize_dpr;
use crate::hooks::{HookError, RenderHooks};

#[derive(Debug, Default)]
struct SignalState {
    needs_resize: Cell<bool>,
    dpr: Cell<Option<f64>>,
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceSignals {
    state: Rc<SignalState>,
}

impl SurfaceSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after the backing size changed.
    pub fn mark_resized(&self) {
        self.state.needs_resize.set(true);
    }

    pub fn set_dpr(&self, dpr: f64) {
        self.state.dpr.set(Some(sanitize_dpr(dpr)));
    }

    /// Returns `true` once per resize notification.
    pub fn take_needs_resize(&self) -> bool {
        self.state.needs_resize.replace(false)
    }

    /// Last reported ratio, 1.0 until the page has sent one.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.state.dpr.get().unwrap_or(1.0)
    }
}

impl RenderHooks for SurfaceSignals {
    fn notify_resized(&self) -> Result<(), HookError> {
        self.mark_resized();
        Ok(())
    }

    fn set_device_pixel_ratio(&self, dpr: f64) -> Result<(), HookError> {
        self.set_dpr(dpr);
        Ok(())
    }
}
