//! # Letterbox Dev
//!
//! Rebuilds the render module when its sources change and tells the page
//! to reload once each build is done.

pub mod build;
pub mod config;
pub mod error;
pub mod reload;
pub mod scheduler;
pub mod watcher;

pub use build::CommandBuild;
pub use config::DevConfig;
pub use error::DevError;
pub use reload::ReloadBroadcaster;
pub use scheduler::{BuildOutcome, BuildRunner, BuildState, RebuildScheduler, ReloadSink, TriggerOutcome};
pub use watcher::{SourceWatcher, WatchSet};
