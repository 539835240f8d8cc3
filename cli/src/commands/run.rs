//! Pipeline run flow: preparation steps, debug prompt, viewer.

use std::io::BufRead;

use uuid::Uuid;

use crate::commands::cli::RunArgs;
use crate::prompt;
use geest_core::api as core_api;

pub async fn handle_run(
    args: RunArgs,
    cfg: &core_api::AppConfig,
) -> Result<i32, core_api::CliError> {
    let launcher = core_api::TokioLauncher::new();
    let mut input = std::io::stdin().lock();
    run_pipeline(args, cfg, &launcher, &mut input).await
}

/// The full run sequence, with the launcher and the prompt's input stream
/// injected so the flow is testable without a terminal.
#[tracing::instrument(name = "cli.run", skip(args, cfg, launcher, input))]
async fn run_pipeline(
    args: RunArgs,
    cfg: &core_api::AppConfig,
    launcher: &dyn core_api::ProcessLauncher,
    input: &mut dyn BufRead,
) -> Result<i32, core_api::CliError> {
    let run_id = Uuid::new_v4().to_string();
    tracing::info!(
        "pipeline run starting: run_id={}, steps={}",
        run_id,
        cfg.pipeline.steps.len()
    );

    let steps: Vec<core_api::Step> = cfg.pipeline.steps.iter().map(|s| s.to_step()).collect();
    let reports = core_api::run_steps(&run_id, &steps, launcher).await;

    let not_clean = reports
        .iter()
        .filter(|r| r.status != core_api::StepStatus::Completed(0))
        .count();
    tracing::info!(
        "preparation steps finished: run_id={}, total={}, not_clean={}",
        run_id,
        reports.len(),
        not_clean
    );

    prompt::print_banner();
    let debug = prompt::ask_debug_mode(input)?;
    // The tracing macros shadow a local named `debug` with `field::debug`,
    // so the flag has to be read before the log line.
    let debug_enabled = debug.is_enabled();
    tracing::info!(
        "debug mode selected: run_id={}, enabled={}",
        run_id,
        debug_enabled
    );

    let mut viewer_cfg = cfg.viewer.clone();
    if let Some(program) = &args.viewer {
        viewer_cfg.program = program.clone();
    }
    let viewer = viewer_cfg.to_step();

    let exit = core_api::launch_viewer(&run_id, &viewer, debug, launcher).await?;
    Ok(exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use geest_core::api::{
        AppConfig, CliError, Launch, PipelineError, ProcessLauncher, DEBUG_ENV_VAR,
    };
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Records every launch and replays scripted results, front to back.
    /// An empty script yields exit code 0.
    struct RecordingLauncher {
        calls: Mutex<Vec<Launch>>,
        results: Mutex<VecDeque<std::io::Result<i32>>>,
    }

    impl RecordingLauncher {
        fn new(results: Vec<std::io::Result<i32>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                results: Mutex::new(results.into()),
            }
        }

        fn calls(&self) -> Vec<Launch> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessLauncher for RecordingLauncher {
        async fn launch(&self, launch: &Launch) -> std::io::Result<i32> {
            self.calls.lock().unwrap().push(launch.clone());
            self.results.lock().unwrap().pop_front().unwrap_or(Ok(0))
        }
    }

    #[tokio::test]
    async fn run_flow_reaches_the_viewer_even_when_a_step_fails() {
        let launcher = RecordingLauncher::new(vec![Ok(2), Ok(0), Ok(0), Ok(7)]);
        let cfg = AppConfig::default();
        let mut input = Cursor::new(&b"1\n"[..]);

        let exit = run_pipeline(RunArgs::default(), &cfg, &launcher, &mut input)
            .await
            .unwrap();

        assert_eq!(exit, 7);
        let calls = launcher.calls();
        assert_eq!(calls.len(), 4);
        let programs: Vec<&str> = calls.iter().map(|l| l.cmd.as_str()).collect();
        assert_eq!(
            programs,
            vec![
                "./generate_model.py",
                "./infer_schema.py",
                "./validate_json.py",
                "./app.py"
            ]
        );
        assert_eq!(
            calls[3].envs.get(DEBUG_ENV_VAR).map(String::as_str),
            Some("1")
        );
    }

    #[tokio::test]
    async fn aborted_prompt_skips_the_viewer() {
        let launcher = RecordingLauncher::new(vec![]);
        let cfg = AppConfig::default();
        let mut input = Cursor::new(&b""[..]);

        let err = run_pipeline(RunArgs::default(), &cfg, &launcher, &mut input)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Pipeline(PipelineError::PromptAborted)
        ));
        assert_eq!(launcher.calls().len(), 3);
    }

    #[tokio::test]
    async fn viewer_flag_overrides_the_configured_program() {
        let launcher = RecordingLauncher::new(vec![]);
        let cfg = AppConfig::default();
        let args = RunArgs {
            viewer: Some("./other.py".to_string()),
        };
        let mut input = Cursor::new(&b"2\n"[..]);

        run_pipeline(args, &cfg, &launcher, &mut input).await.unwrap();

        let calls = launcher.calls();
        let last = calls.last().unwrap();
        assert_eq!(last.cmd, "./other.py");
        assert_eq!(last.envs.get(DEBUG_ENV_VAR).map(String::as_str), Some("0"));
    }
}
