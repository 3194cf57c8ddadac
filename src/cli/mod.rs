//! CLI command handlers for HueGrid.
//!
//! This module provides headless, scriptable access to the palette core,
//! the theme library and the prompt generator.

pub mod color;
pub mod common;
pub mod config;
pub mod generate;
pub mod grid;
pub mod random;
pub mod theme;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use grid::GridArgs;
pub use random::RandomArgs;
pub use theme::ThemeArgs;
