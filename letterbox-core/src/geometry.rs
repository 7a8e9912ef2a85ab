//! Letterbox math: fit a fixed aspect ratio inside a container and derive
//! the device-pixel backing size for it.

use serde::{Deserialize, Serialize};

/// A container rectangle in CSS (layout) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both axes are finite and strictly positive.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The surface's CSS size after letterboxing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CssSize {
    pub width: f64,
    pub height: f64,
}

/// Backing buffer size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    pub const ZERO: BackingSize = BackingSize {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for BackingSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Largest sub-rectangle of `container` with `width / height == target_aspect`.
///
/// Returns `None` when the container has no usable area; callers skip the
/// resize pass and keep whatever size the surface already has.
pub fn fit_aspect(container: Rect, target_aspect: f64) -> Option<CssSize> {
    if !container.has_area() || !(target_aspect.is_finite() && target_aspect > 0.0) {
        return None;
    }

    let fit_height = container.width / target_aspect;
    if fit_height <= container.height {
        Some(CssSize {
            width: container.width,
            height: fit_height,
        })
    } else {
        Some(CssSize {
            width: container.height * target_aspect,
            height: container.height,
        })
    }
}

/// `floor(css * dpr)` per axis, never below one pixel.
pub fn backing_for(css: CssSize, dpr: f64) -> BackingSize {
    let dpr = sanitize_dpr(dpr);
    BackingSize {
        width: device_pixels(css.width, dpr),
        height: device_pixels(css.height, dpr),
    }
}

/// Non-finite or non-positive ratios fall back to 1.0.
pub fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

fn device_pixels(css: f64, dpr: f64) -> u32 {
    let px = (css * dpr).floor();
    if px.is_finite() && px >= 1.0 {
        px.min(u32::MAX as f64) as u32
    } else {
        1
    }
}
