use std::sync::Arc;

use tracing::info;

use crate::compute::ComputeBackend;
use crate::error::Result;
use crate::filters::{posterize_diff, sharpen, Thresholds};
use crate::frame::Image;
use crate::io::image_io::is_raw_path;
use crate::io::raw::save_raw;
use crate::io::save_image;
use crate::oracle::Oracle;

use super::config::PipelineConfig;
use super::helpers::{load_inputs, StageClock};
use super::types::{PipelineReport, PipelineStage, ProgressReporter};

/// Posterize the difference of `a` and `b`, then sharpen the result.
///
/// The classification image is complete before sharpening starts.
pub fn run_pipeline(a: &Image, b: &Image, thresholds: &Thresholds) -> Result<Image> {
    let classified = posterize_diff(a, b, thresholds)?;
    sharpen(&classified)
}

/// [`run_pipeline`] on a specific backend.
pub fn run_pipeline_with(
    backend: &dyn ComputeBackend,
    a: &Image,
    b: &Image,
    thresholds: &Thresholds,
) -> Result<Image> {
    let classified = backend.posterize_diff(a, b, thresholds)?;
    backend.sharpen(&classified)
}

/// Run a configured job: load inputs, run both stages, optionally verify
/// against the oracle and write the output.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    backend: Arc<dyn ComputeBackend>,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineReport> {
    config.validate()?;
    let dims = config.dimensions;
    let thresholds = config.thresholds;
    info!(
        dimensions = %dims,
        t1 = thresholds.t1(),
        t2 = thresholds.t2(),
        device = backend.name(),
        input = %config.input,
        "Starting pipeline"
    );

    let mut clock = StageClock::new(reporter.as_ref());

    let (a, b) = clock.run(PipelineStage::Loading, || load_inputs(&config.input, dims))?;
    let classified = clock.run(PipelineStage::Posterizing, || {
        backend.posterize_diff(&a, &b, &thresholds)
    })?;
    let output = clock.run(PipelineStage::Sharpening, || {
        classified.ensure_dimensions(dims)?;
        backend.sharpen(&classified)
    })?;
    drop(classified);

    let verdict = if config.verify {
        let v = clock.run(PipelineStage::Verifying, || {
            Oracle::new(dims, thresholds).check(&a.to_vec(), &b.to_vec(), &output.to_vec())
        })?;
        info!(verdict = %v, "Reference check complete");
        Some(v)
    } else {
        None
    };

    if let Some(ref path) = config.output {
        clock.run(PipelineStage::Writing, || {
            if is_raw_path(path) {
                save_raw(&output, path)
            } else {
                save_image(&output, path)
            }
        })?;
        info!(output = %path.display(), "Output saved");
    }

    Ok(PipelineReport {
        output,
        backend: backend.name().to_string(),
        verdict,
        timings: clock.into_timings(),
    })
}
