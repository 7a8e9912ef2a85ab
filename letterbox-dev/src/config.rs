use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::error::DevError;
use crate::watcher::WatchSet;

pub const DEFAULT_BUILD_CMD: &str = "wasm-pack build --target web --out-dir pkg";

/// Watch a render module's sources, rebuild on change, reload the page.
#[derive(Debug, Clone, Parser)]
#[command(name = "letterbox-dev", version, about)]
pub struct DevConfig {
    /// Crate root of the render module (build runs here).
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Source tree to watch, relative to the project.
    #[arg(long, default_value = "src")]
    pub src: PathBuf,

    /// Manifest file to watch, relative to the project. Repeatable.
    #[arg(long = "manifest", default_values = ["Cargo.toml", "Cargo.lock"])]
    pub manifests: Vec<String>,

    /// Build command, run through the system shell.
    #[arg(long, default_value = DEFAULT_BUILD_CMD)]
    pub build_cmd: String,

    /// Address for the page reload endpoint.
    #[arg(long, default_value = "127.0.0.1:5174")]
    pub listen: SocketAddr,

    /// Skip the build at startup.
    #[arg(long)]
    pub no_initial_build: bool,
}

impl DevConfig {
    pub fn validate(&self) -> Result<(), DevError> {
        if self.build_cmd.trim().is_empty() {
            return Err(DevError::EmptyBuildCommand);
        }
        Ok(())
    }

    pub fn watch_set(&self) -> Result<WatchSet, DevError> {
        WatchSet::new(&self.project, &self.src, &self.manifests)
    }
}
