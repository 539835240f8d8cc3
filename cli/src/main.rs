use clap::Parser;
mod commands;
mod prompt;
use commands::cli;
use geest_core::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, error::CliError> {
    let mut args = cli::Args::parse();
    let cfg =
        geest_core::config::load_default().map_err(|e| error::CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(error::CliError::Command)?;

    let cmd = args.command.take();

    if let Some(cmd) = cmd {
        return dispatch(cmd, &cfg).await;
    }

    // Bare `geest` behaves like `geest run`.
    let exit = commands::run::handle_run(cli::RunArgs::default(), &cfg).await?;
    Ok(exit)
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success; a finished run exits with the viewer's own code instead
    // 11: config error
    // 20: spawn / IO error
    // 30: debug prompt closed without a selection
    // 50: internal/uncategorized
    match e {
        error::CliError::Config(_) => 11,
        error::CliError::Pipeline(pe) => match pe {
            error::PipelineError::Spawn(_) => 20,
            error::PipelineError::PromptAborted => 30,
        },
        error::CliError::Io(_) => 20,
        error::CliError::Command(_) => 20,
        error::CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(
    cmd: cli::Commands,
    cfg: &geest_core::config::AppConfig,
) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Run(run_args) => {
            let exit = commands::run::handle_run(run_args, cfg).await?;
            Ok(exit)
        }
        cli::Commands::Download(download_args) => {
            commands::download::handle_download(download_args, cfg).await?;
            Ok(0)
        }
    }
}

fn init_tracing(logging: &geest_core::config::LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("geest"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("geest.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
