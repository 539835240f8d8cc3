use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Environment variable the viewer reads to decide whether to enable
/// debug instrumentation. Always set to "1" or "0", never left unset.
pub const DEBUG_ENV_VAR: &str = "GEEST_DEBUG";

/// One pipeline entry: a program plus its fixed arguments.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

/// Fully resolved spawn request handed to a [`ProcessLauncher`].
///
/// [`ProcessLauncher`]: super::ProcessLauncher
#[derive(Debug, Clone)]
pub struct Launch {
    pub cmd: String,
    pub args: Vec<String>,
    pub envs: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DebugMode {
    Enabled,
    Disabled,
}

impl DebugMode {
    /// Value written into [`DEBUG_ENV_VAR`] for the viewer process.
    pub fn env_value(self) -> &'static str {
        match self {
            DebugMode::Enabled => "1",
            DebugMode::Disabled => "0",
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, DebugMode::Enabled)
    }
}

/// How a preparation step ended. Failures are recorded, never acted on:
/// the pipeline always moves to the next step.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StepStatus {
    /// The step ran to completion with this exit code (non-zero included).
    Completed(i32),
    /// The step never started, e.g. program not found or not executable.
    SpawnFailed(String),
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StepReport {
    pub name: String,
    pub status: StepStatus,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}
