//! Surface lifecycle state machine.
//!
//! Before the render loop owns the surface every resize pass is applied on
//! the spot, so initialization never sees a zero-area surface. After
//! handoff, passes only record the latest desired backing size; the value is
//! applied from an animation frame, at most once per `min_apply_interval_ms`.

use crate::config::CoordinatorConfig;
use crate::geometry::{BackingSize, backing_for, fit_aspect, sanitize_dpr};
use crate::hooks::{RenderHooks, notify_quietly};
use crate::surface::{FrameClock, Surface, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No resize pass has run yet.
    Uninitialized,
    /// Sized directly; waiting for a valid surface and the render module.
    Sizing,
    /// The render loop owns the surface. Resizes are coalesced.
    Ready,
}

/// The latest desired backing size not yet applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingResize {
    pub size: BackingSize,
    pub dpr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// Container had no area; the surface keeps its previous size.
    Skipped,
    /// Pre-readiness: backing size written immediately.
    Applied(BackingSize),
    /// Post-readiness: stored as the pending value.
    Coalesced(BackingSize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Nothing was pending.
    Idle,
    /// Throttled; the value stays pending and another frame was requested.
    Deferred,
    /// The pending size already matched the surface.
    Unchanged,
    Applied(BackingSize),
}

pub struct SurfaceCoordinator<S, V, C> {
    surface: S,
    viewport: V,
    clock: C,
    config: CoordinatorConfig,
    phase: Phase,
    pending: Option<PendingResize>,
    frame_requested: bool,
    last_apply_ms: Option<f64>,
    hooks: Option<Box<dyn RenderHooks>>,
}

impl<S, V, C> std::fmt::Debug for SurfaceCoordinator<S, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceCoordinator")
            .field("phase", &self.phase)
            .field("pending", &self.pending)
            .field("frame_requested", &self.frame_requested)
            .field("last_apply_ms", &self.last_apply_ms)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

impl<S, V, C> SurfaceCoordinator<S, V, C>
where
    S: Surface,
    V: Viewport,
    C: FrameClock,
{
    pub fn new(surface: S, viewport: V, clock: C, config: CoordinatorConfig) -> Self {
        Self {
            surface,
            viewport,
            clock,
            config,
            phase: Phase::Uninitialized,
            pending: None,
            frame_requested: false,
            last_apply_ms: None,
            hooks: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pending(&self) -> Option<PendingResize> {
        self.pending
    }

    /// Readiness guard for handoff: both backing axes are nonzero.
    pub fn is_surface_valid(&self) -> bool {
        !self.surface.backing_size().is_empty()
    }

    /// One resize pass: sample geometry, letterbox, set the CSS size, then
    /// apply (before readiness) or coalesce (after) the backing size.
    pub fn resize(&mut self) -> ResizeOutcome {
        if self.phase == Phase::Uninitialized {
            self.phase = Phase::Sizing;
        }

        let dpr = sanitize_dpr(self.viewport.device_pixel_ratio());
        let rect = self.viewport.container_rect();
        let Some(css) = fit_aspect(rect, self.config.target_aspect) else {
            tracing::debug!(
                width = rect.width,
                height = rect.height,
                "container has no area, skipping resize pass"
            );
            return ResizeOutcome::Skipped;
        };

        self.surface.set_css_size(css);
        let desired = backing_for(css, dpr);

        match self.phase {
            Phase::Uninitialized | Phase::Sizing => {
                self.surface.set_backing_size(desired);
                tracing::debug!(%desired, dpr, "surface sized before handoff");
                ResizeOutcome::Applied(desired)
            }
            Phase::Ready => {
                self.pending = Some(PendingResize { size: desired, dpr });
                self.ensure_frame();
                ResizeOutcome::Coalesced(desired)
            }
        }
    }

    /// Animation-frame callback: apply the pending value, rate-limited.
    pub fn on_animation_frame(&mut self) -> FrameOutcome {
        self.frame_requested = false;

        let Some(pending) = self.pending.take() else {
            return FrameOutcome::Idle;
        };

        let now = self.clock.now_ms();
        if let Some(last) = self.last_apply_ms {
            if now - last < self.config.min_apply_interval_ms {
                self.pending = Some(pending);
                // Re-run the pass; it overwrites `pending` with fresher geometry
                // and requests the next frame.
                self.resize();
                self.ensure_frame();
                return FrameOutcome::Deferred;
            }
        }
        self.last_apply_ms = Some(now);

        if self.surface.backing_size() == pending.size {
            return FrameOutcome::Unchanged;
        }

        self.surface.set_backing_size(pending.size);
        tracing::debug!(size = %pending.size, dpr = pending.dpr, "surface resized");
        notify_quietly(self.hooks.as_deref(), true, pending.dpr);
        FrameOutcome::Applied(pending.size)
    }

    /// Give the render loop the surface. Subsequent resizes are coalesced
    /// and reported through `hooks`.
    pub fn hand_off(&mut self, hooks: Option<Box<dyn RenderHooks>>) -> S::Handle {
        self.hooks = hooks;
        self.phase = Phase::Ready;

        let dpr = sanitize_dpr(self.viewport.device_pixel_ratio());
        notify_quietly(self.hooks.as_deref(), false, dpr);

        tracing::info!(size = %self.surface.backing_size(), dpr, "surface handed to render loop");
        self.surface.handle()
    }

    fn ensure_frame(&mut self) {
        if self.pending.is_some() && !self.frame_requested {
            self.frame_requested = true;
            self.clock.request_frame();
        }
    }
}
