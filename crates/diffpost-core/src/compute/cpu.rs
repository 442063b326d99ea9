use crate::error::Result;
use crate::filters::posterize::{posterize_diff, posterize_diff_parallel};
use crate::filters::sharpen::{sharpen, sharpen_parallel};
use crate::filters::Thresholds;
use crate::frame::Image;

use super::ComputeBackend;

/// Single-threaded CPU backend.
pub struct SequentialBackend;

impl ComputeBackend for SequentialBackend {
    fn name(&self) -> &str {
        "CPU/sequential"
    }

    fn posterize_diff(&self, a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image> {
        posterize_diff(a, b, thresholds)
    }

    fn sharpen(&self, classified: &Image) -> Result<Image> {
        sharpen(classified)
    }
}

/// CPU backend using Rayon for per-pixel parallelism.
///
/// Workers write disjoint output samples and only read immutable input.
pub struct ParallelBackend;

impl ComputeBackend for ParallelBackend {
    fn name(&self) -> &str {
        "CPU/Rayon"
    }

    fn posterize_diff(&self, a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image> {
        posterize_diff_parallel(a, b, thresholds)
    }

    fn sharpen(&self, classified: &Image) -> Result<Image> {
        sharpen_parallel(classified)
    }
}
