//! Serializes rebuilds: one build in flight, at most one follow-up queued.
//!
//! A burst of N triggers while a build runs collapses into that build plus
//! a single follow-up. The page is told to reload after every build that
//! actually ran, whether or not it succeeded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub success: bool,
    /// `None` if the process could not be spawned or was killed by a signal.
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

/// Runs one external build to completion.
#[async_trait]
pub trait BuildRunner: Send + Sync {
    async fn build(&self) -> BuildOutcome;
}

/// Tells the page to do a full reload.
pub trait ReloadSink: Send + Sync {
    fn reload(&self);
}

impl<T: ReloadSink + ?Sized> ReloadSink for Arc<T> {
    fn reload(&self) {
        (**self).reload()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Idle,
    Running,
    RunningWithFollowup,
}

/// What a single `trigger()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// This call ran `runs` builds (the first plus any queued follow-ups).
    Built { runs: u32 },
    /// A build was running; a follow-up is now queued.
    Queued,
    /// A follow-up was already queued; nothing changed.
    AlreadyQueued,
}

pub struct RebuildScheduler<B, R> {
    runner: B,
    sink: R,
    state: Mutex<BuildState>,
    builds_run: AtomicU64,
}

impl<B, R> std::fmt::Debug for RebuildScheduler<B, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RebuildScheduler")
            .field("state", &*self.lock_state())
            .field("builds_run", &self.builds_run.load(Ordering::Relaxed))
            .finish()
    }
}

impl<B, R> RebuildScheduler<B, R> {
    pub fn new(runner: B, sink: R) -> Self {
        Self {
            runner,
            sink,
            state: Mutex::new(BuildState::Idle),
            builds_run: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> BuildState {
        *self.lock_state()
    }

    pub fn builds_run(&self) -> u64 {
        self.builds_run.load(Ordering::Relaxed)
    }

    pub fn runner(&self) -> &B {
        &self.runner
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    // The guarded value is a plain enum, so a poisoned lock is still usable.
    fn lock_state(&self) -> MutexGuard<'_, BuildState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<B, R> RebuildScheduler<B, R>
where
    B: BuildRunner,
    R: ReloadSink,
{
    /// Request a rebuild. Returns immediately if one is already running;
    /// otherwise builds (and drains the queued follow-up) before returning.
    pub async fn trigger(&self) -> TriggerOutcome {
        {
            let mut state = self.lock_state();
            match *state {
                BuildState::Idle => *state = BuildState::Running,
                BuildState::Running => {
                    *state = BuildState::RunningWithFollowup;
                    tracing::debug!("build in flight, queued one follow-up");
                    return TriggerOutcome::Queued;
                }
                BuildState::RunningWithFollowup => return TriggerOutcome::AlreadyQueued,
            }
        }

        let mut runs = 0u32;
        loop {
            let outcome = self.runner.build().await;
            runs += 1;
            self.builds_run.fetch_add(1, Ordering::Relaxed);

            if outcome.success {
                tracing::info!(elapsed_ms = outcome.elapsed.as_millis() as u64, "build finished");
            } else {
                tracing::warn!(
                    exit_code = ?outcome.exit_code,
                    elapsed_ms = outcome.elapsed.as_millis() as u64,
                    "build failed, reloading anyway"
                );
            }
            self.sink.reload();

            let follow_up = {
                let mut state = self.lock_state();
                if *state == BuildState::RunningWithFollowup {
                    *state = BuildState::Running;
                    true
                } else {
                    *state = BuildState::Idle;
                    false
                }
            };
            if !follow_up {
                break;
            }
            tracing::debug!("running queued follow-up build");
        }

        TriggerOutcome::Built { runs }
    }
}
