pub mod config;
mod helpers;
mod orchestrator;
mod types;

pub use orchestrator::{run_pipeline, run_pipeline_reported, run_pipeline_with};
pub use types::{NoOpReporter, PipelineReport, PipelineStage, ProgressReporter, StageTiming};
