use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diffpost_core::filters::posterize::level_histogram;
use diffpost_core::filters::Level;
use diffpost_core::io::load_any;

use super::pipeline::resolve_dimensions;

#[derive(Args)]
pub struct InfoArgs {
    /// Image file or raw sample buffer
    pub file: PathBuf,

    /// Image height (required for raw inputs)
    #[arg(long)]
    pub height: Option<usize>,

    /// Image width (required for raw inputs)
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let dims = resolve_dimensions(&args.file, args.height, args.width)?;
    let image = load_any(&args.file, dims)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    if image.is_empty() {
        anyhow::bail!("{} has no samples", args.file.display());
    }

    let min = image.data.iter().copied().min().unwrap_or(0);
    let max = image.data.iter().copied().max().unwrap_or(0);
    let counts = level_histogram(&image);
    let levels: Vec<String> = [Level::Low, Level::Mid, Level::High]
        .iter()
        .zip(counts)
        .map(|(level, count)| format!("{}={}", level, count))
        .collect();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}", dims);
    println!("Samples:     {}", image.len());
    println!("Range:       {}..={}", min, max);
    println!("Levels:      {}", levels.join(" "));

    let other = image.len() - counts.iter().sum::<usize>();
    if other > 0 {
        println!("Non-level:   {}", other);
    }

    Ok(())
}
