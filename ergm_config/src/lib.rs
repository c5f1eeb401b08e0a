// Internal modules
pub mod config;
pub mod file_processor;
pub mod graph;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod reference_resolution;
pub mod schema;
pub mod syntax;
pub mod terms;
pub mod tokens;
pub mod utils;
pub mod validation;

// Re-export key types for library consumers
pub use graph::{Graph, NetworkAttributes};
pub use pipeline::{load_config, resolve_and_validate, LoadedConfig, PipelineError};
pub use schema::{ConfigRecord, EstimConfig, SimConfig};
pub use terms::ParamConfig;
