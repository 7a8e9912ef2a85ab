use thiserror::Error;

/// Why a render-loop notification did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// The module does not export this hook.
    #[error("hook not provided by the render module")]
    Unsupported,
    /// The module exists but has not finished initializing.
    #[error("render module is not ready: {0}")]
    NotReady(String),
}

/// Optional notifications into the render loop. Both are best-effort.
pub trait RenderHooks {
    /// The backing size changed; the module re-reads it from the surface.
    fn notify_resized(&self) -> Result<(), HookError> {
        Err(HookError::Unsupported)
    }

    fn set_device_pixel_ratio(&self, _dpr: f64) -> Result<(), HookError> {
        Err(HookError::Unsupported)
    }
}

/// Send both notifications, swallowing failures.
pub(crate) fn notify_quietly(hooks: Option<&dyn RenderHooks>, resized: bool, dpr: f64) {
    let Some(hooks) = hooks else {
        return;
    };

    if resized {
        if let Err(err) = hooks.notify_resized() {
            tracing::trace!("resize hook skipped: {err}");
        }
    }
    if let Err(err) = hooks.set_device_pixel_ratio(dpr) {
        tracing::trace!("dpr hook skipped: {err}");
    }
}
