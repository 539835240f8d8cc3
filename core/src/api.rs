//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `geest_core::api` instead of reaching into internal modules.

pub use crate::config::{
    geest_data_dir, load_default, AppConfig, LoggingConfig, OverpassConfig, PipelineConfig,
    StepConfig, ViewerConfig,
};
pub use crate::error::{CliError, PipelineError};
pub use crate::overpass::{
    assemble, write_geojson, FeatureCollection, Geometry, GeometryKind, OsmFeature,
    OverpassClient, OverpassResponse,
};
pub use crate::pipeline::{
    launch_viewer, normalize_exit, run_steps, DebugMode, Launch, ProcessLauncher, Step,
    StepReport, StepStatus, TokioLauncher, DEBUG_ENV_VAR,
};
