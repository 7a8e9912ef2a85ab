use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use letterbox_dev::{
    CommandBuild, DevConfig, DevError, RebuildScheduler, ReloadBroadcaster, SourceWatcher,
};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

type Scheduler = RebuildScheduler<CommandBuild, Arc<ReloadBroadcaster>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = DevConfig::parse();
    config.validate()?;
    let watch_set = config.watch_set()?;

    let reload = Arc::new(ReloadBroadcaster::new());
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| DevError::Bind {
            addr: config.listen,
            source,
        })?;
    tokio::spawn(reload.clone().serve(listener));

    let scheduler: Arc<Scheduler> = Arc::new(RebuildScheduler::new(
        CommandBuild::new(&config.build_cmd, watch_set.project()),
        reload,
    ));

    let (tx, mut rx) = mpsc::channel(256);
    let _watcher = SourceWatcher::new(watch_set, tx).context("Failed to start source watcher")?;

    if !config.no_initial_build {
        spawn_trigger(&scheduler);
    }

    loop {
        tokio::select! {
            changed = rx.recv() => match changed {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "source changed");
                    spawn_trigger(&scheduler);
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

// Each trigger gets its own task; the scheduler collapses concurrent ones.
fn spawn_trigger(scheduler: &Arc<Scheduler>) {
    let scheduler = scheduler.clone();
    tokio::spawn(async move {
        scheduler.trigger().await;
    });
}
