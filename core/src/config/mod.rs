mod load;
mod types;

pub use load::{geest_data_dir, load_default};
pub use types::{
    AppConfig, LoggingConfig, OverpassConfig, PipelineConfig, StepConfig, ViewerConfig,
};
