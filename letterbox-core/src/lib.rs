//! # Letterbox Core
//!
//! Keeps a GPU surface at the pixel-exact backing size for its container and
//! hands it to an external render loop once it is valid.
//! Browser wiring lives in `letterbox-web`.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod lifecycle;
pub mod signals;
pub mod surface;

pub use config::{ConfigError, CoordinatorConfig};
pub use coordinator::{FrameOutcome, PendingResize, Phase, ResizeOutcome, SurfaceCoordinator};
pub use error::StartError;
pub use geometry::{BackingSize, CssSize, Rect, backing_for, fit_aspect, sanitize_dpr};
pub use hooks::{HookError, RenderHooks};
pub use lifecycle::{NextFrame, RenderLoop, start};
pub use signals::SurfaceSignals;
pub use surface::{FrameClock, Surface, Viewport};
