// Page-level constants and helpers shared by the wasm binding and native tests.

use letterbox_core::CoordinatorConfig;

use crate::error::WebError;

pub const DEFAULT_ROOT_ID: &str = "app";
pub const CANVAS_ID: &str = "game";

pub const WEBGPU_UNAVAILABLE: &str =
    "WebGPU is not available. Try Chrome/Edge and ensure WebGPU is enabled.";

/// Root container styling: center the canvas so letterbox bars split evenly.
pub const ROOT_STYLE: [(&str, &str); 3] = [
    ("display", "flex"),
    ("align-items", "center"),
    ("justify-content", "center"),
];

pub fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Parse page-supplied overrides; absent fields keep their defaults.
pub fn config_from_json(json: &str) -> Result<CoordinatorConfig, WebError> {
    let config: CoordinatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
