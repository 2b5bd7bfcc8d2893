//! Writes the Kok's Galaxy preset, centered in a 25x25 canvas, as a CSV seed
//! file usable with `life_frames --csv`.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use life_frames::domain::{loader, presets};

#[derive(Parser)]
#[command(name = "make_galaxy")]
#[command(about = "Generate a Kok's Galaxy CSV seed file")]
struct Cli {
    /// Output path for the CSV seed
    #[arg(long, short, default_value = "koks_galaxy.csv")]
    out: PathBuf,

    /// Canvas side length the pattern is centered on
    #[arg(long, default_value = "25")]
    canvas: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let grid = presets::koks_galaxy().centered_on(cli.canvas)?;
    fs::write(&cli.out, loader::to_csv(&grid))?;

    println!("wrote {}x{} seed to {}", cli.canvas, cli.canvas, cli.out.display());
    Ok(())
}
