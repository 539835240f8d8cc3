use async_trait::async_trait;
use tokio::process::Command;

use super::exit::normalize_exit;
use super::types::Launch;

/// Spawns a program and waits for it. The single seam between the pipeline
/// logic and the operating system, so tests can substitute a recorder.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Run the launch to completion and return its normalized exit code.
    ///
    /// An `Err` means the program never started; a non-zero exit code is
    /// still `Ok`.
    async fn launch(&self, launch: &Launch) -> std::io::Result<i32>;
}

/// Launcher backed by [`tokio::process::Command`]. The child inherits the
/// orchestrator's stdio, so step and viewer output lands on the terminal
/// untouched.
pub struct TokioLauncher {}

impl TokioLauncher {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TokioLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn launch(&self, launch: &Launch) -> std::io::Result<i32> {
        let status = Command::new(&launch.cmd)
            .args(&launch.args)
            .envs(&launch.envs)
            .status()
            .await?;
        Ok(normalize_exit(status))
    }
}
