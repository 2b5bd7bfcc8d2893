// Domain layer - grid state, transition rule, pattern loading
pub mod domain;

// Application layer - run configuration and frame sequencing
pub mod application;

// Infrastructure layer - raster output
pub mod rendering;

// Re-exports for convenience
pub use application::{FrameSink, PngDirSink, RunConfig, RunError, SeedSource, runner};
pub use domain::{Cell, ConwayRule, Grid, ParseError, Pattern, Rule, SizeError, loader, presets};
pub use rendering::{OpacityMode, RenderConfig, render};
