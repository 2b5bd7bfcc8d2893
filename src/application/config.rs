use std::path::PathBuf;

use crate::rendering::RenderConfig;

/// Where the generation-0 grid comes from
#[derive(Clone, Debug)]
pub enum SeedSource {
    /// Uniform random square grid of the given size
    Random { size: usize },
    /// CSV pattern source, one grid row per line
    Csv { path: PathBuf },
    /// Named preset pattern centered on a square canvas
    Preset { name: String, canvas_size: usize },
}

/// Full configuration for one run. Built explicitly by the caller; the
/// pipeline itself never reads environment or interactive input.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub seed: SeedSource,
    pub generations: u32,
    pub render: RenderConfig,
    pub output_dir: PathBuf,
    /// Seed for the random source; `None` draws one from the OS
    pub rng_seed: Option<u64>,
}
