use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::filters::Thresholds;
use crate::frame::Image;

use super::cpu::{ParallelBackend, SequentialBackend};

/// An execution path for the two pipeline stages.
///
/// Every implementation must produce exactly the same samples; the oracle
/// exists to check that.
pub trait ComputeBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Difference-posterize stage.
    fn posterize_diff(&self, a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image>;

    /// Sharpen stage.
    fn sharpen(&self, classified: &Image) -> Result<Image>;
}

/// How the stages are scheduled across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Parallel at or above `PARALLEL_PIXEL_THRESHOLD` pixels.
    #[default]
    Auto,
    Sequential,
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Sequential => write!(f, "Sequential"),
            Self::Parallel => write!(f, "Parallel"),
        }
    }
}

/// Pick a backend for images of `pixel_count` samples.
pub fn create_backend(mode: ExecutionMode, pixel_count: usize) -> Arc<dyn ComputeBackend> {
    let parallel = match mode {
        ExecutionMode::Sequential => false,
        ExecutionMode::Parallel => true,
        ExecutionMode::Auto => pixel_count >= PARALLEL_PIXEL_THRESHOLD,
    };
    let backend: Arc<dyn ComputeBackend> = if parallel {
        Arc::new(ParallelBackend)
    } else {
        Arc::new(SequentialBackend)
    };
    tracing::debug!(mode = %mode, pixel_count, backend = backend.name(), "Selected backend");
    backend
}
