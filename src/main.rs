//! Command-line driver: builds a `RunConfig` from flags (no interactive
//! prompts) and runs the simulation-and-rendering pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_frames::application::{RunConfig, SeedSource, runner};
use life_frames::rendering::{OpacityMode, RenderConfig};

#[derive(Parser)]
#[command(name = "life_frames")]
#[command(about = "Conway's Game of Life rendered to per-generation PNG frames")]
struct Cli {
    /// Side length of the random starting grid
    #[arg(long, default_value = "100", conflicts_with_all = ["csv", "pattern"])]
    size: usize,

    /// Seed the grid from a CSV file (rows of comma-separated 0/1 values)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Seed the grid from a named preset pattern, centered on the canvas
    #[arg(long, conflicts_with = "csv")]
    pattern: Option<String>,

    /// Canvas side length for --pattern
    #[arg(long, default_value = "25")]
    canvas: usize,

    /// Number of generations to render
    #[arg(long, short, default_value = "100")]
    generations: u32,

    /// Target output resolution in pixels
    #[arg(long, short, default_value = "1000")]
    resolution: u32,

    /// Shade live cells by distance from the grid center
    #[arg(long)]
    radial: bool,

    /// Directory receiving one PNG per generation
    #[arg(long, short, default_value = "output")]
    out: PathBuf,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = if let Some(path) = cli.csv {
        SeedSource::Csv { path }
    } else if let Some(name) = cli.pattern {
        SeedSource::Preset {
            name,
            canvas_size: cli.canvas,
        }
    } else {
        SeedSource::Random { size: cli.size }
    };

    let opacity = if cli.radial {
        OpacityMode::Radial
    } else {
        OpacityMode::Uniform
    };

    let config = RunConfig {
        seed,
        generations: cli.generations,
        render: RenderConfig::new(cli.resolution, opacity),
        output_dir: cli.out.clone(),
        rng_seed: cli.seed,
    };

    runner::run_pipeline(&config)?;
    info!(output = %cli.out.display(), "frames written");

    Ok(())
}
