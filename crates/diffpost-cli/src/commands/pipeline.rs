use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use diffpost_core::compute::{create_backend, ExecutionMode};
use diffpost_core::consts::{DEFAULT_T1, DEFAULT_T2};
use diffpost_core::filters::Thresholds;
use diffpost_core::frame::Dimensions;
use diffpost_core::io::image_io::{is_raw_path, load_image};
use diffpost_core::pipeline::config::{InputSource, PipelineConfig};
use diffpost_core::pipeline::run_pipeline_reported;

use crate::progress::StageProgress;
use crate::summary::{print_pipeline_summary, print_timings, print_verdict};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Auto,
    Sequential,
    Parallel,
}

impl From<ModeArg> for ExecutionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => ExecutionMode::Auto,
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Parallel => ExecutionMode::Parallel,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// First input (image file, or .raw/.bin little-endian i32 buffer)
    pub a: Option<PathBuf>,

    /// Second input, same size as the first
    pub b: Option<PathBuf>,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower difference threshold
    #[arg(long, default_value_t = DEFAULT_T1)]
    pub t1: i32,

    /// Upper difference threshold
    #[arg(long, default_value_t = DEFAULT_T2)]
    pub t2: i32,

    /// Image height (required for raw inputs, read from the file otherwise)
    #[arg(long)]
    pub height: Option<usize>,

    /// Image width (required for raw inputs, read from the file otherwise)
    #[arg(long)]
    pub width: Option<usize>,

    /// Execution mode
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: ModeArg,

    /// Check the result against the reference oracle
    #[arg(long)]
    pub verify: bool,

    /// Output file path (.png, .tiff, or .raw/.bin); nothing is written if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Dimensions from explicit flags, or from the first input file's header.
pub fn resolve_dimensions(
    first: &Path,
    height: Option<usize>,
    width: Option<usize>,
) -> Result<Dimensions> {
    match (height, width) {
        (Some(h), Some(w)) => Ok(Dimensions::new(h, w)?),
        (None, None) if is_raw_path(first) => {
            anyhow::bail!("Raw input {} needs --height and --width", first.display())
        }
        (None, None) => {
            let image = load_image(first)
                .with_context(|| format!("Failed to load {}", first.display()))?;
            Ok(image.dimensions())
        }
        _ => anyhow::bail!("--height and --width must be given together"),
    }
}

fn build_config_from_args(args: &RunArgs) -> Result<PipelineConfig> {
    let (Some(a), Some(b)) = (&args.a, &args.b) else {
        anyhow::bail!("Two input files are required unless --config is given");
    };
    Ok(PipelineConfig {
        input: InputSource::Files {
            a: a.clone(),
            b: b.clone(),
        },
        dimensions: resolve_dimensions(a, args.height, args.width)?,
        thresholds: Thresholds::new(args.t1, args.t2)?,
        mode: args.mode.into(),
        verify: args.verify,
        output: args.output.clone(),
    })
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config: PipelineConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        tracing::debug!(path = %config_path.display(), "Loaded pipeline config");
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)?
    };

    let backend = create_backend(config.mode, config.dimensions.pixel_count());
    print_pipeline_summary(&config, backend.name());

    let stage_count = 3 + u64::from(config.verify) + u64::from(config.output.is_some());
    let progress = Arc::new(StageProgress::new(stage_count)?);
    let report = run_pipeline_reported(&config, backend, progress.clone())?;
    progress.finish();
    println!();

    print_timings(&report);
    if let Some(ref verdict) = report.verdict {
        print_verdict(verdict, config.dimensions);
    }
    if let Some(ref path) = config.output {
        println!("Output saved to {}", path.display());
    }

    if !report.passed() {
        anyhow::bail!("Result does not match the reference oracle");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct RunCli {
        #[command(flatten)]
        run: RunArgs,
    }

    fn config_for(argv: &[&str]) -> PipelineConfig {
        let cli = RunCli::try_parse_from(argv).unwrap();
        build_config_from_args(&cli.run).unwrap()
    }

    #[test]
    fn output_is_optional() {
        let config = config_for(&["run", "a.raw", "b.raw", "--height", "4", "--width", "4"]);
        assert!(config.output.is_none());
        assert_eq!(config.dimensions, Dimensions::new(4, 4).unwrap());
    }

    #[test]
    fn output_flag_sets_path() {
        let config = config_for(&[
            "run", "a.raw", "b.raw", "--height", "4", "--width", "4", "-o", "out.raw",
        ]);
        assert_eq!(config.output, Some(PathBuf::from("out.raw")));
    }

    #[test]
    fn raw_inputs_need_dimensions() {
        let cli = RunCli::try_parse_from(["run", "a.raw", "b.raw"]).unwrap();
        assert!(build_config_from_args(&cli.run).is_err());
    }
}
