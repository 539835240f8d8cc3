use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("pipeline failed: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("command failed: {0}")]
    Command(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("debug prompt closed without a selection")]
    PromptAborted,
}
