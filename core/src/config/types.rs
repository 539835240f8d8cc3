use serde::{Deserialize, Serialize};

use crate::pipeline::Step;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub overpass: OverpassConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            viewer: ViewerConfig::default(),
            overpass: OverpassConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Preparation steps, run sequentially in listed order.
    #[serde(default = "default_steps")]
    pub steps: Vec<StepConfig>,
}

fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig {
            name: "generate-model".to_string(),
            program: "./generate_model.py".to_string(),
            args: vec![],
        },
        StepConfig {
            name: "infer-schema".to_string(),
            program: "./infer_schema.py".to_string(),
            args: vec![],
        },
        StepConfig {
            name: "validate-json".to_string(),
            program: "./validate_json.py".to_string(),
            args: vec![],
        },
    ]
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl StepConfig {
    pub fn to_step(&self) -> Step {
        Step {
            name: self.name.clone(),
            program: self.program.clone(),
            args: self.args.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_viewer_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

fn default_viewer_program() -> String {
    "./app.py".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            program: default_viewer_program(),
            args: vec![],
        }
    }
}

impl ViewerConfig {
    pub fn to_step(&self) -> Step {
        Step {
            name: "viewer".to_string(),
            program: self.program.clone(),
            args: self.args.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub base_url: String,

    #[serde(default = "default_overpass_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_overpass_timeout_ms() -> u64 {
    25_000
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_url(),
            timeout_ms: default_overpass_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "geest_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}
