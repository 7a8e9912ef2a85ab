//! The host-side collaborators the coordinator drives.
//!
//! Implementations live in `letterbox-web` for the browser and in the test
//! suite for native runs.

use crate::geometry::{BackingSize, CssSize, Rect};

/// The drawable element. Its backing size is only ever changed by the
/// coordinator once the render loop owns it.
pub trait Surface {
    /// Cloneable reference handed to the render loop at handoff.
    type Handle: Clone;

    fn backing_size(&self) -> BackingSize;
    fn set_backing_size(&mut self, size: BackingSize);
    fn set_css_size(&mut self, size: CssSize);
    fn handle(&self) -> Self::Handle;
}

/// Geometry inputs, sampled on demand and never cached across passes.
pub trait Viewport {
    fn device_pixel_ratio(&self) -> f64;

    /// Content box of the element the surface is mounted in.
    fn container_rect(&self) -> Rect;
}

/// Animation-frame scheduling plus a monotonic clock.
pub trait FrameClock {
    /// Schedule one call to `SurfaceCoordinator::on_animation_frame`.
    fn request_frame(&mut self);

    /// Milliseconds since an arbitrary origin (`performance.now()` in the browser).
    fn now_ms(&self) -> f64;
}
