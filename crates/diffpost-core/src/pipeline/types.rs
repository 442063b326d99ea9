use std::time::Duration;

use crate::frame::Image;
use crate::oracle::Verdict;

/// Pipeline processing stage, used for progress reporting and timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Posterizing,
    Sharpening,
    Verifying,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading inputs"),
            Self::Posterizing => write!(f, "Difference + posterize"),
            Self::Sharpening => write!(f, "Sharpening"),
            Self::Verifying => write!(f, "Reference check"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Wall-clock duration of one completed stage.
#[derive(Clone, Copy, Debug)]
pub struct StageTiming {
    pub stage: PipelineStage,
    pub elapsed: Duration,
}

/// Everything a configured run produced.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub output: Image,
    /// Name of the backend that ran the stages.
    pub backend: String,
    /// Oracle outcome, when verification was requested.
    pub verdict: Option<Verdict>,
    pub timings: Vec<StageTiming>,
}

impl PipelineReport {
    pub fn total_elapsed(&self) -> Duration {
        self.timings.iter().map(|t| t.elapsed).sum()
    }

    /// False only when verification ran and failed.
    pub fn passed(&self) -> bool {
        self.verdict.map_or(true, |v| v.passed())
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self, _timing: &StageTiming) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
