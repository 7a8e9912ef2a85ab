use thiserror::Error;

use crate::config::ConfigError;

/// Failures of the `start()` lifecycle.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("invalid coordinator config: {0}")]
    Config(#[from] ConfigError),
    #[error("render module failed to initialize: {0:#}")]
    ModuleInit(anyhow::Error),
}
