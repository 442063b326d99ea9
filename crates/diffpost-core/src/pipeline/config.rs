use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compute::ExecutionMode;
use crate::consts::DEFAULT_SEED;
use crate::error::{DiffPostError, Result};
use crate::filters::Thresholds;
use crate::frame::Dimensions;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: InputSource,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub mode: ExecutionMode,
    /// Check the result against the reference oracle.
    #[serde(default)]
    pub verify: bool,
    pub output: Option<PathBuf>,
}

impl PipelineConfig {
    /// Reject configurations that cannot describe a valid run.
    pub fn validate(&self) -> Result<()> {
        let Dimensions { height, width } = self.dimensions;
        if height == 0 || width == 0 {
            return Err(DiffPostError::Config(format!(
                "image dimensions must be non-zero, got {height}x{width}"
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            dimensions: Dimensions::default(),
            thresholds: Thresholds::default(),
            mode: ExecutionMode::default(),
            verify: false,
            output: None,
        }
    }
}

/// Where the two source images come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputSource {
    /// Image files or raw `.raw`/`.bin` sample buffers.
    Files { a: PathBuf, b: PathBuf },
    /// Uniformly random 8-bit samples from a seeded generator.
    Synthetic { seed: u64 },
}

impl Default for InputSource {
    fn default() -> Self {
        Self::Synthetic { seed: DEFAULT_SEED }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Files { a, b } => write!(f, "{} vs {}", a.display(), b.display()),
            Self::Synthetic { seed } => write!(f, "synthetic (seed {seed})"),
        }
    }
}
