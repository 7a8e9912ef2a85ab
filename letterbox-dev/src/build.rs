use std::path::PathBuf;
use std::time::Instant;

use async_trait::async_trait;

use crate::scheduler::{BuildOutcome, BuildRunner};

/// Runs the build command through the system shell from the project root.
#[derive(Debug, Clone)]
pub struct CommandBuild {
    command: String,
    cwd: PathBuf,
}

impl CommandBuild {
    pub fn new(command: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            cwd: cwd.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn shell(&self) -> tokio::process::Command {
        // Through the shell so pipes, `&&` and env assignments work.
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = tokio::process::Command::new("cmd");
            cmd.args(["/C", &self.command]);
            cmd
        };

        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = tokio::process::Command::new("sh");
            cmd.args(["-c", &self.command]);
            cmd
        };

        cmd.current_dir(&self.cwd).kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl BuildRunner for CommandBuild {
    async fn build(&self) -> BuildOutcome {
        tracing::info!(command = %self.command, cwd = %self.cwd.display(), "building");
        let started = Instant::now();

        match self.shell().status().await {
            Ok(status) => BuildOutcome {
                success: status.success(),
                exit_code: status.code(),
                elapsed: started.elapsed(),
            },
            Err(err) => {
                tracing::error!("failed to spawn build `{}`: {err}", self.command);
                BuildOutcome {
                    success: false,
                    exit_code: None,
                    elapsed: started.elapsed(),
                }
            }
        }
    }
}
