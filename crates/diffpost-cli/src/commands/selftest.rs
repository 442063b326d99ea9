use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use diffpost_core::compute::create_backend;
use diffpost_core::consts::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_T1, DEFAULT_T2, DEFAULT_WIDTH};
use diffpost_core::filters::Thresholds;
use diffpost_core::frame::Dimensions;
use diffpost_core::pipeline::config::{InputSource, PipelineConfig};
use diffpost_core::pipeline::{run_pipeline_reported, NoOpReporter};

use super::pipeline::ModeArg;
use crate::summary::{print_pipeline_summary, print_timings, print_verdict};

#[derive(Args)]
pub struct SelftestArgs {
    /// Image height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Image width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Seed for the random inputs
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Lower difference threshold
    #[arg(long, default_value_t = DEFAULT_T1)]
    pub t1: i32,

    /// Upper difference threshold
    #[arg(long, default_value_t = DEFAULT_T2)]
    pub t2: i32,

    /// Execution path checked against the oracle
    #[arg(long, value_enum, default_value = "parallel")]
    pub mode: ModeArg,
}

/// Random inputs, one run on the chosen backend, exact check against the oracle.
pub fn run(args: &SelftestArgs) -> Result<()> {
    let config = PipelineConfig {
        input: InputSource::Synthetic { seed: args.seed },
        dimensions: Dimensions::new(args.height, args.width)?,
        thresholds: Thresholds::new(args.t1, args.t2)?,
        mode: args.mode.into(),
        verify: true,
        output: None,
    };

    let backend = create_backend(config.mode, config.dimensions.pixel_count());
    print_pipeline_summary(&config, backend.name());

    let report = run_pipeline_reported(&config, backend, Arc::new(NoOpReporter))?;
    print_timings(&report);

    let Some(ref verdict) = report.verdict else {
        anyhow::bail!("Reference check did not run");
    };
    print_verdict(verdict, config.dimensions);

    if !verdict.passed() {
        anyhow::bail!("Self-test failed");
    }
    Ok(())
}
