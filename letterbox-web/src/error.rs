use letterbox_core::{ConfigError, StartError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global `window` (not running in a browser page)")]
    NoWindow,
    #[error("missing #{0} root")]
    MissingRoot(String),
    #[error("WebGPU is not available")]
    WebGpuUnavailable,
    #[error("invalid coordinator config: {0}")]
    Config(String),
    #[error(transparent)]
    Start(#[from] StartError),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        WebError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        WebError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WebError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(err: WebError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
