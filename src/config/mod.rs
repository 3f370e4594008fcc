//! Configuration management for the automaton runner

pub mod settings;

pub use settings::{CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig};
