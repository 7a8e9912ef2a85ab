use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TARGET_ASPECT: f64 = 16.0 / 9.0;

/// ~30 Hz cap on surface reconfiguration.
pub const DEFAULT_MIN_APPLY_INTERVAL_MS: f64 = 33.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target aspect must be finite and positive, got {0}")]
    InvalidAspect(f64),
    #[error("minimum apply interval must be finite and non-negative, got {0}")]
    InvalidInterval(f64),
}

/// Tunables for the surface coordinator. Missing fields take the defaults,
/// so a page can override just one of them from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Width / height of the content the render loop draws.
    pub target_aspect: f64,
    pub min_apply_interval_ms: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            target_aspect: DEFAULT_TARGET_ASPECT,
            min_apply_interval_ms: DEFAULT_MIN_APPLY_INTERVAL_MS,
        }
    }
}

impl CoordinatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_aspect.is_finite() && self.target_aspect > 0.0) {
            return Err(ConfigError::InvalidAspect(self.target_aspect));
        }
        if !(self.min_apply_interval_ms.is_finite() && self.min_apply_interval_ms >= 0.0) {
            return Err(ConfigError::InvalidInterval(self.min_apply_interval_ms));
        }
        Ok(())
    }
}
