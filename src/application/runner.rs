//! Drives N generations in lockstep: render the current grid, hand the frame
//! to the sink, then step. Strictly sequential; each grid depends on the
//! previous one.

use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::config::{RunConfig, SeedSource};
use crate::domain::{ConwayRule, Grid, ParseError, SizeError, loader, presets};
use crate::rendering::{RenderConfig, render};

/// Serial evolution is cheaper below this many cells; above it the
/// row-parallel path wins.
const PARALLEL_THRESHOLD_CELLS: usize = 10_000;

/// Frame delivery failed; aborts the run immediately
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
}

/// Anything that can go wrong building or driving a run
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("failed to read pattern source: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown preset pattern \"{name}\"")]
    UnknownPattern { name: String },
}

/// Collaborator that persists one frame per generation
pub trait FrameSink {
    fn deliver(&mut self, generation: u32, frame: &RgbaImage) -> Result<(), SinkError>;
}

/// Writes each frame as `generation_NNNN.png` inside one run-scoped directory
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl FrameSink for PngDirSink {
    fn deliver(&mut self, generation: u32, frame: &RgbaImage) -> Result<(), SinkError> {
        let path = self.dir.join(format!("generation_{generation:04}.png"));
        frame.save(&path)?;
        Ok(())
    }
}

/// Run the simulation-and-rendering pipeline.
///
/// Frame `g` is rendered from the pre-step grid; the successor of the final
/// rendered generation is computed and returned but never rendered. A sink
/// failure surfaces immediately and aborts the run.
pub fn run(
    initial: Grid,
    generations: u32,
    render_config: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> Result<Grid, SinkError> {
    let rule = ConwayRule;
    let (width, height) = initial.dimensions();
    let parallel = width * height >= PARALLEL_THRESHOLD_CELLS;

    info!(width, height, generations, parallel, "starting run");

    let mut current = initial;
    for generation in 0..generations {
        let frame = render(&current, render_config);
        sink.deliver(generation, &frame)?;
        debug!(generation, population = current.population(), "frame delivered");

        current = if parallel {
            current.evolve_parallel(&rule)
        } else {
            current.evolve(&rule)
        };
    }

    info!(final_population = current.population(), "run complete");
    Ok(current)
}

/// Build the generation-0 grid from the configured seed source
pub fn initial_grid(config: &RunConfig) -> Result<Grid, RunError> {
    match &config.seed {
        SeedSource::Random { size } => {
            let mut rng = match config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Ok(loader::random_with(&mut rng, *size))
        }
        SeedSource::Csv { path } => {
            let source = fs::read_to_string(path)?;
            Ok(loader::parse_csv(&source)?)
        }
        SeedSource::Preset { name, canvas_size } => {
            let pattern = presets::find(name).ok_or_else(|| RunError::UnknownPattern {
                name: name.clone(),
            })?;
            Ok(pattern.centered_on(*canvas_size)?)
        }
    }
}

/// The whole configurable pipeline: seed, then simulate and persist frames
pub fn run_pipeline(config: &RunConfig) -> Result<Grid, RunError> {
    let initial = initial_grid(config)?;
    let mut sink = PngDirSink::create(&config.output_dir)?;
    Ok(run(initial, config.generations, &config.render, &mut sink)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::OpacityMode;

    /// Test sink that keeps every delivered frame in memory
    #[derive(Default)]
    struct MemorySink {
        frames: Vec<(u32, RgbaImage)>,
    }

    impl FrameSink for MemorySink {
        fn deliver(&mut self, generation: u32, frame: &RgbaImage) -> Result<(), SinkError> {
            self.frames.push((generation, frame.clone()));
            Ok(())
        }
    }

    /// Sink that rejects every frame
    struct FailingSink;

    impl FrameSink for FailingSink {
        fn deliver(&mut self, _generation: u32, _frame: &RgbaImage) -> Result<(), SinkError> {
            Err(SinkError::Io(std::io::Error::other("sink unavailable")))
        }
    }

    #[test]
    fn test_runner_delivers_one_frame_per_generation() {
        let initial = loader::parse_csv("0,1,0\n0,1,0\n0,1,0").unwrap();
        let config = RenderConfig::new(3, OpacityMode::Uniform);
        let mut sink = MemorySink::default();

        let final_grid = run(initial, 4, &config, &mut sink).unwrap();

        let indices: Vec<u32> = sink.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        // Blinker has period 2: after 4 steps it is back to the vertical phase
        assert_eq!(final_grid, loader::parse_csv("0,1,0\n0,1,0\n0,1,0").unwrap());
    }

    #[test]
    fn test_frame_zero_is_the_pre_step_state() {
        let initial = loader::parse_csv("0,1,0\n0,1,0\n0,1,0").unwrap();
        let config = RenderConfig::new(3, OpacityMode::Uniform);
        let mut sink = MemorySink::default();

        run(initial.clone(), 1, &config, &mut sink).unwrap();

        let (_, frame) = &sink.frames[0];
        let expected = render(&initial, &config);
        assert_eq!(frame.as_raw(), expected.as_raw());
    }

    #[test]
    fn test_sink_failure_aborts_the_run() {
        let initial = loader::parse_csv("1,1\n1,1").unwrap();
        let config = RenderConfig::new(2, OpacityMode::Uniform);
        let result = run(initial, 3, &config, &mut FailingSink);
        assert!(matches!(result, Err(SinkError::Io(_))));
    }

    #[test]
    fn test_zero_generations_renders_nothing() {
        let initial = loader::parse_csv("1,1\n1,1").unwrap();
        let config = RenderConfig::new(2, OpacityMode::Uniform);
        let mut sink = MemorySink::default();

        let final_grid = run(initial.clone(), 0, &config, &mut sink).unwrap();

        assert!(sink.frames.is_empty());
        assert_eq!(final_grid, initial);
    }

    #[test]
    fn test_initial_grid_from_preset() {
        let config = RunConfig {
            seed: SeedSource::Preset {
                name: "koks-galaxy".into(),
                canvas_size: 25,
            },
            generations: 1,
            render: RenderConfig::new(25, OpacityMode::Uniform),
            output_dir: "unused".into(),
            rng_seed: None,
        };
        let grid = initial_grid(&config).unwrap();
        assert_eq!(grid.dimensions(), (25, 25));
        assert_eq!(grid.population(), 48);
    }

    #[test]
    fn test_initial_grid_rejects_unknown_preset() {
        let config = RunConfig {
            seed: SeedSource::Preset {
                name: "penrose-tile".into(),
                canvas_size: 25,
            },
            generations: 1,
            render: RenderConfig::new(25, OpacityMode::Uniform),
            output_dir: "unused".into(),
            rng_seed: None,
        };
        assert!(matches!(
            initial_grid(&config),
            Err(RunError::UnknownPattern { .. })
        ));
    }
}
