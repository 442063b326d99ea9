use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diffpost_core::consts::{DEFAULT_T1, DEFAULT_T2};
use diffpost_core::filters::Thresholds;
use diffpost_core::io::load_any;
use diffpost_core::oracle::Oracle;

use super::pipeline::resolve_dimensions;
use crate::summary::print_verdict;

#[derive(Args)]
pub struct VerifyArgs {
    /// First source input
    pub a: PathBuf,

    /// Second source input
    pub b: PathBuf,

    /// Result produced by another execution path
    pub candidate: PathBuf,

    /// Lower difference threshold
    #[arg(long, default_value_t = DEFAULT_T1)]
    pub t1: i32,

    /// Upper difference threshold
    #[arg(long, default_value_t = DEFAULT_T2)]
    pub t2: i32,

    /// Image height (required for raw inputs)
    #[arg(long)]
    pub height: Option<usize>,

    /// Image width (required for raw inputs)
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    let dims = resolve_dimensions(&args.a, args.height, args.width)?;
    let thresholds = Thresholds::new(args.t1, args.t2)?;

    let load = |path: &PathBuf| {
        load_any(path, dims).with_context(|| format!("Failed to load {}", path.display()))
    };
    let a = load(&args.a)?;
    let b = load(&args.b)?;
    let candidate = load(&args.candidate)?;

    let oracle = Oracle::new(dims, thresholds);
    println!(
        "Checking {} ({}, {})",
        args.candidate.display(),
        oracle.dimensions(),
        oracle.thresholds()
    );

    let verdict = oracle.check(&a.to_vec(), &b.to_vec(), &candidate.to_vec())?;
    print_verdict(&verdict, oracle.dimensions());

    if !verdict.passed() {
        anyhow::bail!("Candidate does not match the reference oracle");
    }
    Ok(())
}
