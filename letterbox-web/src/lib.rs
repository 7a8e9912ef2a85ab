#![forbid(unsafe_code)]
//! Browser binding for `letterbox-core`.
//!
//! Mounts a `<canvas>` into the page root, keeps it letterboxed and
//! pixel-exact under window/container resizes and DPR changes, and hands it
//! to a WebGPU render loop once it has a valid size.

mod error;
mod page;

pub use error::WebError;
pub use page::{
    CANVAS_ID, DEFAULT_ROOT_ID, ROOT_STYLE, WEBGPU_UNAVAILABLE, config_from_json, css_px,
};

// The DOM wiring is only meaningful on wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
