//! Configuration management for the Fix-a-Pix solver

pub mod settings;

pub use settings::{CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SolverBackend, SolverConfig};
