pub mod exit;
mod launcher;
mod run;
pub mod types;

pub use exit::normalize_exit;
pub use launcher::{ProcessLauncher, TokioLauncher};
pub use run::{launch_viewer, run_steps};
pub use types::{DebugMode, Launch, Step, StepReport, StepStatus, DEBUG_ENV_VAR};
