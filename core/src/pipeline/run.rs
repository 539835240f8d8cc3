use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;

use crate::error::PipelineError;

use super::launcher::ProcessLauncher;
use super::types::{DebugMode, Launch, Step, StepReport, StepStatus, DEBUG_ENV_VAR};

/// Run every preparation step in order, front to back.
///
/// Step outcomes are reported, never enforced: a step that exits non-zero
/// or fails to spawn is logged and the pipeline moves on. The viewer is
/// expected to surface whatever state the steps left behind.
pub async fn run_steps(
    run_id: &str,
    steps: &[Step],
    launcher: &dyn ProcessLauncher,
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(steps.len());
    for step in steps {
        reports.push(run_step(run_id, step, launcher).await);
    }
    reports
}

async fn run_step(run_id: &str, step: &Step, launcher: &dyn ProcessLauncher) -> StepReport {
    let launch = Launch {
        cmd: step.program.clone(),
        args: step.args.clone(),
        envs: HashMap::new(),
    };
    tracing::info!(
        "step starting: run_id={}, step={}, program={}",
        run_id,
        step.name,
        step.program
    );

    let started_at = Utc::now();
    let t0 = Instant::now();
    let status = match launcher.launch(&launch).await {
        Ok(0) => {
            tracing::info!("step completed: run_id={}, step={}, exit_code=0", run_id, step.name);
            StepStatus::Completed(0)
        }
        Ok(code) => {
            tracing::warn!(
                "step exited non-zero, continuing: run_id={}, step={}, exit_code={}",
                run_id,
                step.name,
                code
            );
            StepStatus::Completed(code)
        }
        Err(e) => {
            tracing::warn!(
                "step failed to start, continuing: run_id={}, step={}, error={}",
                run_id,
                step.name,
                e
            );
            StepStatus::SpawnFailed(e.to_string())
        }
    };

    StepReport {
        name: step.name.clone(),
        status,
        started_at,
        duration_ms: t0.elapsed().as_millis() as u64,
    }
}

/// Launch the viewer with [`DEBUG_ENV_VAR`] set from the debug selection
/// and wait for it. The viewer's exit code becomes the orchestrator's.
///
/// Unlike the steps, a viewer that cannot be spawned is an error.
pub async fn launch_viewer(
    run_id: &str,
    viewer: &Step,
    debug: DebugMode,
    launcher: &dyn ProcessLauncher,
) -> Result<i32, PipelineError> {
    // The tracing macros shadow a local named `debug` with `field::debug`,
    // so the value has to be read before the log line.
    let debug_value = debug.env_value();
    let mut envs = HashMap::new();
    envs.insert(DEBUG_ENV_VAR.to_string(), debug_value.to_string());
    let launch = Launch {
        cmd: viewer.program.clone(),
        args: viewer.args.clone(),
        envs,
    };
    tracing::info!(
        "viewer starting: run_id={}, program={}, {}={}",
        run_id,
        viewer.program,
        DEBUG_ENV_VAR,
        debug_value
    );

    let code = launcher
        .launch(&launch)
        .await
        .map_err(|e| PipelineError::Spawn(e.to_string()))?;
    tracing::info!("viewer exited: run_id={}, exit_code={}", run_id, code);
    Ok(code)
}
