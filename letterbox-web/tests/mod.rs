use letterbox_core::ConfigError;
use letterbox_web::{
    CANVAS_ID, DEFAULT_ROOT_ID, ROOT_STYLE, WEBGPU_UNAVAILABLE, WebError, config_from_json, css_px,
};

// ============================================================================
// Page Helper Tests
// ============================================================================

#[test]
fn test_css_px_formats_fractional_sizes() {
    assert_eq!(css_px(400.0), "400px");
    assert_eq!(css_px(711.5), "711.5px");
}

#[test]
fn test_root_style_centers_canvas() {
    assert!(ROOT_STYLE.contains(&("display", "flex")));
    assert!(ROOT_STYLE.contains(&("align-items", "center")));
    assert!(ROOT_STYLE.contains(&("justify-content", "center")));
}

#[test]
fn test_page_ids() {
    assert_eq!(DEFAULT_ROOT_ID, "app");
    assert_eq!(CANVAS_ID, "game");
    assert!(WEBGPU_UNAVAILABLE.contains("WebGPU"));
}

// ============================================================================
// Config Parsing Tests
// ============================================================================

#[test]
fn test_config_from_empty_json_is_default() {
    let config = config_from_json("{}").unwrap();
    assert_eq!(config, letterbox_core::CoordinatorConfig::default());
}

#[test]
fn test_config_from_json_override() {
    let config = config_from_json(r#"{"target_aspect": 1.0, "min_apply_interval_ms": 16}"#).unwrap();
    assert_eq!(config.target_aspect, 1.0);
    assert_eq!(config.min_apply_interval_ms, 16.0);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    let err = config_from_json(r#"{"target_aspect": -2.0}"#).unwrap_err();
    assert!(matches!(err, WebError::Config(_)));

    let err = config_from_json("not json").unwrap_err();
    assert!(matches!(err, WebError::Config(_)));
}

// ============================================================================
// WebError Tests
// ============================================================================

#[test]
fn test_web_error_messages() {
    assert_eq!(WebError::MissingRoot("app".to_string()).to_string(), "missing #app root");
    assert_eq!(WebError::WebGpuUnavailable.to_string(), "WebGPU is not available");
    let err: WebError = ConfigError::InvalidAspect(0.0).into();
    assert!(err.to_string().contains("target aspect"));
}
