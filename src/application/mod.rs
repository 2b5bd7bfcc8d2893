mod config;

pub mod runner;

pub use config::{RunConfig, SeedSource};
pub use runner::{FrameSink, PngDirSink, RunError, SinkError};
