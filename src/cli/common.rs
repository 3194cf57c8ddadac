//! Shared CLI plumbing: error type, exit codes, config flags and output helpers.

use clap::Args;
use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::models::{ColumnMode, GridConfig};
use crate::services::JsonThemeLibrary;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or unknown entity
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
    /// Prompt-to-theme generation failed
    GenerationError = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// CLI error carrying a message and an exit code.
#[derive(Debug)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code of the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid input, exit code 1.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// I/O failure, exit code 2.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }

    /// Generation failure, exit code 3.
    pub fn generation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::GenerationError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Grid parameter flags shared by commands that build a configuration.
///
/// Each flag overrides the corresponding field of a base configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct GridParamArgs {
    /// Hue of the first row (degrees)
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub base_hue: Option<f64>,

    /// Saturation of the first column (percent)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub base_sat: Option<f64>,

    /// Lightness of the first column (percent)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub base_light: Option<f64>,

    /// Hue change per row (degrees, may be negative)
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub hue_step: Option<f64>,

    /// Saturation change per column in saturation mode
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub sat_step: Option<f64>,

    /// Lightness change per column in lightness mode
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub light_step: Option<f64>,

    /// Number of rows
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub rows: Option<i32>,

    /// Number of columns
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub cols: Option<i32>,

    /// Column mode (lightness or saturation)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<ColumnMode>,
}

impl GridParamArgs {
    /// Applies the given flags on top of `base`.
    #[must_use]
    pub fn apply(&self, base: GridConfig) -> GridConfig {
        GridConfig {
            base_hue: self.base_hue.unwrap_or(base.base_hue),
            base_sat: self.base_sat.unwrap_or(base.base_sat),
            base_light: self.base_light.unwrap_or(base.base_light),
            hue_step: self.hue_step.unwrap_or(base.hue_step),
            sat_step: self.sat_step.unwrap_or(base.sat_step),
            light_step: self.light_step.unwrap_or(base.light_step),
            rows: self.rows.unwrap_or(base.rows),
            cols: self.cols.unwrap_or(base.cols),
            column_mode: self.mode.unwrap_or(base.column_mode),
        }
    }
}

/// Loads the application configuration, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Opens the configured theme library.
pub fn open_library() -> CliResult<JsonThemeLibrary> {
    let config = load_config()?;
    JsonThemeLibrary::from_config(&config)
        .map_err(|e| CliError::io(format!("Failed to locate theme library: {e:#}")))
}

/// Prints a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints a configuration in human-readable form.
pub fn print_config(config: &GridConfig) {
    println!("  Base Hue:    {}°", config.base_hue);
    println!("  Base Sat:    {}%", config.base_sat);
    println!("  Base Light:  {}%", config.base_light);
    println!("  Hue Step:    {}° per row", config.hue_step);
    println!("  Sat Step:    {}% per column", config.sat_step);
    println!("  Light Step:  {}% per column", config.light_step);
    println!("  Grid:        {} x {}", config.rows, config.cols);
    println!("  Column Mode: {}", config.column_mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let args = GridParamArgs {
            base_hue: Some(10.0),
            hue_step: Some(-30.0),
            mode: Some(ColumnMode::Saturation),
            ..GridParamArgs::default()
        };
        let config = args.apply(GridConfig::default());

        assert!((config.base_hue - 10.0).abs() < f64::EPSILON);
        assert!((config.hue_step - -30.0).abs() < f64::EPSILON);
        assert_eq!(config.column_mode, ColumnMode::Saturation);
        assert!((config.base_sat - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.rows, 8);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
        assert_eq!(CliError::generation("x").exit_code.code(), 3);
    }
}
