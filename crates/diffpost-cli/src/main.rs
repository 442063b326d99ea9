mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "diffpost", about = "Difference posterize and sharpen for grayscale images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the difference-posterize-sharpen pipeline on two images
    Run(commands::pipeline::RunArgs),
    /// Check a candidate result against the reference oracle
    Verify(commands::verify::VerifyArgs),
    /// Run on random inputs and check the result against the oracle
    Selftest(commands::selftest::SelftestArgs),
    /// Print the default pipeline config as TOML
    Config(commands::config::ConfigArgs),
    /// Show image dimensions and level counts
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Selftest(args) => commands::selftest::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
