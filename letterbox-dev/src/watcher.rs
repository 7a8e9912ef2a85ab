use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::error::DevError;

/// The source tree plus the manifest files that should trigger a rebuild.
#[derive(Debug, Clone)]
pub struct WatchSet {
    project: PathBuf,
    src: PathBuf,
    manifests: Vec<PathBuf>,
}

impl WatchSet {
    /// `src` and `manifests` are relative to `project`. Roots are
    /// canonicalized so they compare equal to the paths notify reports.
    pub fn new(project: &Path, src: &Path, manifests: &[String]) -> Result<Self, DevError> {
        let project = canonical("project directory", project)?;
        let src = canonical("source directory", &project.join(src))?;
        let manifests = manifests.iter().map(|name| project.join(name)).collect();
        Ok(Self {
            project,
            src,
            manifests,
        })
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn manifests(&self) -> &[PathBuf] {
        &self.manifests
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.starts_with(&self.src) || self.manifests.iter().any(|m| m == path)
    }

    /// First changed path worth rebuilding for; reads are ignored.
    pub fn relevant_path(&self, event: &Event) -> Option<PathBuf> {
        if matches!(event.kind, EventKind::Access(_)) {
            return None;
        }
        event.paths.iter().find(|p| self.matches(p)).cloned()
    }
}

fn canonical(what: &'static str, path: &Path) -> Result<PathBuf, DevError> {
    path.canonicalize().map_err(|source| DevError::MissingPath {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Watches a `WatchSet` and forwards each relevant changed path.
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
}

impl std::fmt::Debug for SourceWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceWatcher").finish()
    }
}

impl SourceWatcher {
    pub fn new(set: WatchSet, tx: mpsc::Sender<PathBuf>) -> Result<Self, DevError> {
        let (sync_tx, sync_rx) = std::sync::mpsc::channel();

        let mut watcher = RecommendedWatcher::new(sync_tx, Config::default())?;
        watcher.watch(&set.src, RecursiveMode::Recursive)?;
        // Manifests are matched by path under a non-recursive project watch;
        // watching the files themselves loses them on write-then-rename saves.
        watcher.watch(&set.project, RecursiveMode::NonRecursive)?;

        tracing::info!(src = %set.src.display(), manifests = set.manifests.len(), "watching for changes");

        // Bridge blocking notify -> async tokio
        tokio::task::spawn_blocking(move || {
            for res in sync_rx {
                match res {
                    Ok(event) => {
                        if let Some(path) = set.relevant_path(&event) {
                            if tx.blocking_send(path).is_err() {
                                break;
                            }
                        }
                    }
                    Err(e) => tracing::error!("Watch error: {:?}", e),
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}
