use anyhow::Result;
use diffpost_core::pipeline::{PipelineStage, ProgressReporter, StageTiming};
use indicatif::{ProgressBar, ProgressStyle};

/// Drives an indicatif bar with one tick per pipeline stage.
pub struct StageProgress {
    pb: ProgressBar,
}

impl StageProgress {
    pub fn new(stage_count: u64) -> Result<Self> {
        let pb = ProgressBar::new(stage_count);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:24} [{bar:30}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { pb })
    }

    pub fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}

impl ProgressReporter for StageProgress {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(stage.to_string());
    }

    fn finish_stage(&self, _timing: &StageTiming) {
        self.pb.inc(1);
    }
}
