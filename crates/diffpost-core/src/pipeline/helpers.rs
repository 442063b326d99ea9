use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::frame::{Dimensions, Image};
use crate::io::{load_any, random_pair};

use super::config::InputSource;
use super::types::{PipelineStage, ProgressReporter, StageTiming};

/// Records the duration of each stage and forwards stage events.
pub(super) struct StageClock<'a> {
    reporter: &'a dyn ProgressReporter,
    timings: Vec<StageTiming>,
}

impl<'a> StageClock<'a> {
    pub(super) fn new(reporter: &'a dyn ProgressReporter) -> Self {
        Self {
            reporter,
            timings: Vec::new(),
        }
    }

    pub(super) fn run<T>(
        &mut self,
        stage: PipelineStage,
        work: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        self.reporter.begin_stage(stage);
        let start = Instant::now();
        let out = work()?;
        let timing = StageTiming {
            stage,
            elapsed: start.elapsed(),
        };
        debug!(
            stage = %stage,
            elapsed_us = timing.elapsed.as_micros() as u64,
            "Stage complete"
        );
        self.reporter.finish_stage(&timing);
        self.timings.push(timing);
        Ok(out)
    }

    pub(super) fn into_timings(self) -> Vec<StageTiming> {
        self.timings
    }
}

/// Load or generate the two source images.
pub(super) fn load_inputs(source: &InputSource, dims: Dimensions) -> Result<(Image, Image)> {
    match source {
        InputSource::Files { a, b } => {
            let img_a = load_any(a, dims)?;
            let img_b = load_any(b, dims)?;
            Ok((img_a, img_b))
        }
        InputSource::Synthetic { seed } => Ok(random_pair(dims, *seed)),
    }
}
